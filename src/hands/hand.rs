//! Scored Blackjack hands.
//!
//! A [`Hand`] accumulates cards in the order they are received and keeps its
//! score up to date incrementally. Scores count every ace as 1; the best
//! score promotes a single ace to 11 whenever that stays within 21.
//!
//! ```
//! use blackjack_cards::cards::Card;
//! use blackjack_cards::hands::Hand;
//!
//! let mut hand = Hand::new();
//! hand.receive_card("A-S".parse().unwrap());
//! hand.receive_card(Card::new("9", "H").unwrap());
//!
//! assert_eq!(hand.score(), 10);
//! assert_eq!(hand.best_score(), 20);
//! assert!(!hand.is_busted());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Card;
use crate::core::config::BLACKJACK;

/// Promoting one ace from 1 to 11 adds this much.
const ACE_PROMOTION: u32 = 10;

/// Who the hand belongs to.
///
/// Stored as data only; splitting and payouts live at the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    /// A player's starting hand.
    #[default]
    Regular,
    /// A hand created by splitting a pair. Never counts as blackjack.
    Split,
    /// The dealer's hand.
    Dealer,
}

/// Lifecycle of a hand for scoring purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandState {
    /// No cards yet.
    Empty,
    /// Holding cards, best score within 21.
    Active,
    /// Best score above 21. Terminal.
    Busted,
}

/// Cards held by one player or dealer position.
///
/// Most hands hold only a few cards, so they are stored inline.
///
/// Deserializing keeps only `cards` and `kind` and replays every card
/// through [`Hand::receive_card`]; stored scores and flags are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HandRepr")]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
    score: u32,
    has_ace: bool,
    busted: bool,
    kind: HandKind,
}

/// Serialized form of a [`Hand`]: only what cannot be derived.
#[derive(Deserialize)]
struct HandRepr {
    cards: Vec<Card>,
    #[serde(default)]
    kind: HandKind,
}

impl From<HandRepr> for Hand {
    fn from(repr: HandRepr) -> Self {
        let mut hand = Hand::with_kind(repr.kind);
        for card in repr.cards {
            hand.receive_card(card);
        }
        hand
    }
}

impl Hand {
    /// Create an empty regular hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty hand of the given kind.
    #[must_use]
    pub fn with_kind(kind: HandKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create an empty dealer hand.
    #[must_use]
    pub fn dealer() -> Self {
        Self::with_kind(HandKind::Dealer)
    }

    /// Take one dealt card.
    ///
    /// Call exactly once per card, in deal order. Cards are never removed.
    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
        if card.is_ace() {
            self.has_ace = true;
        }
        self.score += u32::from(card.value());

        if !self.busted && self.best_score() > BLACKJACK {
            self.busted = true;
            debug!(score = self.score, kind = ?self.kind, "hand busted");
        }
    }

    /// Highest total within 21 if one exists, otherwise the low total.
    ///
    /// At most one ace is ever counted high: two aces at 11 would already be
    /// 22.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        let high = self.score + ACE_PROMOTION;
        if self.has_ace && high <= BLACKJACK {
            high
        } else {
            self.score
        }
    }

    /// Sum of card values with every ace counted as 1.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.has_ace
    }

    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.busted
    }

    /// True when an ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.best_score() != self.score
    }

    /// Two-card 21 in a regular or dealer hand.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.kind != HandKind::Split && self.cards.len() == 2 && self.best_score() == BLACKJACK
    }

    /// Exactly two cards of the same rank in a regular hand.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.kind == HandKind::Regular
            && matches!(self.cards.as_slice(), [a, b] if a.rank() == b.rank())
    }

    #[must_use]
    pub fn state(&self) -> HandState {
        if self.busted {
            HandState::Busted
        } else if self.cards.is_empty() {
            HandState::Empty
        } else {
            HandState::Active
        }
    }

    #[must_use]
    pub fn kind(&self) -> HandKind {
        self.kind
    }

    /// Cards in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("Empty hand");
        }

        f.write_str("Hand contains:")?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        write!(f, "\nHand score is: {}", self.best_score())
    }
}
