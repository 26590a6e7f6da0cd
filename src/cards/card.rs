//! Card values: rank, suit, kind and Blackjack point value.
//!
//! A `Card` is a small `Copy` value. Its point value is derived from the rank
//! once at construction and can never change afterwards.
//!
//! ```
//! use blackjack_cards::cards::{Card, CardKind};
//!
//! let ace = Card::new("A", "S").unwrap();
//! assert_eq!(ace.kind(), CardKind::Ace);
//! assert_eq!(ace.value(), 1);
//! assert_eq!(ace.high_value(), Some(11));
//! assert_eq!(ace.to_string(), "A-S");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{CardError, Result};

/// Card rank, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All 13 ranks, A through K.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Which family of card this rank belongs to.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Rank::Ace => CardKind::Ace,
            Rank::Jack | Rank::Queen | Rank::King => CardKind::Face,
            _ => CardKind::Number,
        }
    }

    /// Blackjack value with the ace counted low.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.kind() {
            CardKind::Ace => 1,
            CardKind::Face => 10,
            CardKind::Number => self as u8,
        }
    }

    /// Display symbol: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        let rank = match s {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(CardError::InvalidRank(s.to_string())),
        };
        Ok(rank)
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
}

impl Suit {
    /// All four suits in `S, D, H, C` order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    /// Single-letter symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Clubs => "C",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "S" => Ok(Suit::Spades),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "C" => Ok(Suit::Clubs),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

/// The three card families that score differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Worth 1 or 11.
    Ace,
    /// J, Q, K: always 10.
    Face,
    /// 2-10: face value.
    Number,
}

/// One playing card.
///
/// Fields are private so a card can't be edited after it is built; the
/// value always agrees with the rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// High value an ace may take.
    pub const ACE_HIGH: u8 = 11;

    /// Build a card from its rank and suit symbols.
    ///
    /// Fails with [`CardError::InvalidRank`] or [`CardError::InvalidSuit`]
    /// when either symbol is outside its enumeration. The rank is checked
    /// first.
    pub fn new(rank: &str, suit: &str) -> Result<Self> {
        let rank = rank.parse()?;
        let suit = suit.parse()?;
        Ok(Self::from_parts(rank, suit))
    }

    /// Build a card from already validated parts.
    #[must_use]
    pub const fn from_parts(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.rank.kind()
    }

    /// Point value, ace counted as 1.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Alternate value; only aces have one.
    #[must_use]
    pub const fn high_value(&self) -> Option<u8> {
        match self.kind() {
            CardKind::Ace => Some(Self::ACE_HIGH),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.kind(), CardKind::Ace)
    }
}

impl fmt::Display for Card {
    /// Format as `rank-suit`, e.g. `A-S`, `10-H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank, self.suit)
    }
}

/// Parse the display form, e.g. `"Q-D"`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        let (rank, suit) = s
            .split_once('-')
            .ok_or_else(|| CardError::InvalidCard(s.to_string()))?;
        Self::new(rank, suit)
    }
}
