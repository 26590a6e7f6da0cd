//! Card system: card values and shuffled shoes.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: fixed enumerations (13 ranks, 4 suits)
//! - `CardKind`: Ace, Face or Number
//! - `Card`: immutable card with its Blackjack value
//! - `Shoe`: one to eight decks in a single shuffled draw sequence
//! - `Deck`: the one-deck case of `Shoe`

pub mod card;
pub mod shoe;

pub use card::{Card, CardKind, Rank, Suit};
pub use shoe::{Deck, Shoe};
