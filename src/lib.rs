//! # blackjack-cards
//!
//! Playing cards, multi-deck shoes and scored hands for Blackjack-style
//! games.
//!
//! ## Design Principles
//!
//! 1. **Immutable cards**: a `Card`'s value is fixed by its rank at
//!    construction.
//!
//! 2. **Injected randomness**: every shuffle draws from a caller-owned
//!    `GameRng`, so the same seed always deals the same shoe.
//!
//! 3. **Composition over collections**: `Shoe` and `Hand` own their cards and
//!    expose only dealing and scoring, never the underlying sequence.
//!
//! Table logic (turn order, betting, splitting, reshuffle policy) belongs to
//! the caller.
//!
//! ## Modules
//!
//! - `core`: RNG, error type, configuration
//! - `cards`: ranks, suits, cards and shoes
//! - `hands`: scored hands
//!
//! ## Usage
//!
//! ```
//! use blackjack_cards::{CardError, GameRng, Hand, Shoe};
//!
//! let mut rng = GameRng::new(2024);
//! let mut shoe = Shoe::new(2, &mut rng)?;
//! let mut hand = Hand::new();
//!
//! while !hand.is_busted() && hand.best_score() < 17 {
//!     hand.receive_card(shoe.remove_top()?);
//! }
//! assert!(hand.best_score() >= 17);
//! # Ok::<(), CardError>(())
//! ```

pub mod cards;
pub mod core;
pub mod hands;

// Re-export commonly used types
pub use crate::core::{
    CardError, GameRng, GameRngState, ShoeConfig,
    BLACKJACK, CARDS_PER_DECK, MAX_DECKS, MIN_DECKS,
};

pub use crate::cards::{Card, CardKind, Deck, Rank, Shoe, Suit};

pub use crate::hands::{Hand, HandKind, HandState};
