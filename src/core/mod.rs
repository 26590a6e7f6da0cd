//! Core building blocks: the injectable RNG, the error type, configuration.
//!
//! Nothing here knows about card values or scoring.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{ShoeConfig, BLACKJACK, CARDS_PER_DECK, MAX_DECKS, MIN_DECKS};
pub use error::{CardError, Result};
pub use rng::{GameRng, GameRngState};
