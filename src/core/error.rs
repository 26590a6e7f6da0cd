//! Error type shared by card parsing, shoe construction and dealing.

use thiserror::Error;

/// Everything that can go wrong when building cards or dealing from a shoe.
///
/// All variants are precondition failures: nothing is retried internally and
/// no partially built value is ever returned alongside an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("invalid rank {0:?}: expected one of A, 2-10, J, Q, K")]
    InvalidRank(String),

    #[error("invalid suit {0:?}: expected one of S, D, H, C")]
    InvalidSuit(String),

    #[error("invalid card {0:?}: expected \"rank-suit\", e.g. \"10-H\"")]
    InvalidCard(String),

    #[error("invalid deck count {0}: a shoe holds 1 to 8 decks")]
    InvalidDeckCount(usize),

    #[error("cannot remove a card from an empty deck")]
    EmptyDeck,
}

/// Result alias for fallible card operations.
pub type Result<T> = std::result::Result<T, CardError>;
