//! Shoe configuration and table-wide constants.

use serde::{Deserialize, Serialize};

use super::error::{CardError, Result};

/// Cards in one standard deck (no jokers).
pub const CARDS_PER_DECK: usize = 52;

/// Smallest shoe: a single deck.
pub const MIN_DECKS: usize = 1;

/// Largest shoe.
pub const MAX_DECKS: usize = 8;

/// Best possible hand total; anything above busts.
pub const BLACKJACK: u32 = 21;

/// Parameters for building a [`Shoe`](crate::cards::Shoe).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeConfig {
    /// Number of standard decks combined into the shoe (1-8).
    pub num_decks: usize,

    /// Seed for the shuffle. `None` draws a fresh seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            num_decks: MIN_DECKS,
            seed: None,
        }
    }
}

impl ShoeConfig {
    /// Set the number of decks.
    #[must_use]
    pub fn with_decks(mut self, num_decks: usize) -> Self {
        self.num_decks = num_decks;
        self
    }

    /// Make the shuffle reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the deck count is within `MIN_DECKS..=MAX_DECKS`.
    pub fn validate(&self) -> Result<()> {
        validate_deck_count(self.num_decks)
    }
}

pub(crate) fn validate_deck_count(num_decks: usize) -> Result<()> {
    if (MIN_DECKS..=MAX_DECKS).contains(&num_decks) {
        Ok(())
    } else {
        Err(CardError::InvalidDeckCount(num_decks))
    }
}
