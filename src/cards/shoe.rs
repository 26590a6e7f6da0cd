//! Decks and multi-deck shoes.
//!
//! A [`Shoe`] combines one to eight standard 52-card decks into a single
//! shuffled draw sequence. Cards leave it only through [`Shoe::remove_top`];
//! there is no indexed access and no peeking.
//!
//! ## Shuffling
//!
//! Construction randomizes in two stages:
//!
//! 1. a Fisher-Yates shuffle of the composed decks, then
//! 2. repeated uniform draws without replacement from that shuffled pool,
//!    each drawn card appended to the final order.
//!
//! Stage 2 alone already gives a uniform permutation. Stage 1 is kept so
//! that a given seed always produces the same two-stage ordering.
//!
//! ```
//! use blackjack_cards::cards::Shoe;
//! use blackjack_cards::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut shoe = Shoe::new(6, &mut rng).unwrap();
//! assert_eq!(shoe.remaining_count(), 312);
//!
//! let card = shoe.remove_top().unwrap();
//! assert_eq!(shoe.remaining_count(), 311);
//! println!("dealt {card}");
//! ```

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::card::{Card, Rank, Suit};
use crate::core::config::{validate_deck_count, ShoeConfig, CARDS_PER_DECK};
use crate::core::error::{CardError, Result};
use crate::core::rng::GameRng;

/// A single 52-card deck is just a one-deck shoe.
pub type Deck = Shoe;

/// One or more standard decks shuffled into one draw sequence.
#[derive(Clone, Debug)]
pub struct Shoe {
    /// Undealt cards. The last element is the next one dealt.
    cards: Vec<Card>,
    num_decks: usize,
}

impl Shoe {
    /// Build and shuffle a shoe of `num_decks` standard decks.
    ///
    /// Fails with [`CardError::InvalidDeckCount`] outside `1..=8`.
    pub fn new(num_decks: usize, rng: &mut GameRng) -> Result<Self> {
        validate_deck_count(num_decks)?;
        Ok(Self::shuffled(num_decks, rng))
    }

    /// Build and shuffle a single 52-card deck.
    pub fn single_deck(rng: &mut GameRng) -> Self {
        Self::shuffled(1, rng)
    }

    /// Build a shoe from a [`ShoeConfig`], seeding a fresh [`GameRng`].
    pub fn from_config(config: &ShoeConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::new(config.num_decks, &mut rng)
    }

    fn shuffled(num_decks: usize, rng: &mut GameRng) -> Self {
        let mut pool = compose(num_decks);

        // Stage 1
        rng.shuffle(&mut pool);

        // Stage 2: `remove` keeps the rest of the pool in shuffled order
        let mut cards = Vec::with_capacity(pool.len());
        while !pool.is_empty() {
            let pick = rng.gen_range_usize(0..pool.len());
            cards.push(pool.remove(pick));
        }

        debug!(num_decks, size = cards.len(), seed = rng.seed(), "built shoe");

        Self { cards, num_decks }
    }

    /// Remove and return the next card.
    ///
    /// Fails with [`CardError::EmptyDeck`] once every card has been dealt.
    pub fn remove_top(&mut self) -> Result<Card> {
        match self.cards.pop() {
            Some(card) => {
                trace!(%card, remaining = self.cards.len(), "dealt card");
                if self.cards.is_empty() {
                    debug!(num_decks = self.num_decks, "shoe exhausted");
                }
                Ok(card)
            }
            None => Err(CardError::EmptyDeck),
        }
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn num_decks(&self) -> usize {
        self.num_decks
    }

    /// Size of the shoe before anything was dealt.
    #[must_use]
    pub fn original_size(&self) -> usize {
        self.num_decks * CARDS_PER_DECK
    }

    #[must_use]
    pub fn dealt_count(&self) -> usize {
        self.original_size() - self.remaining_count()
    }

    /// Fraction of the shoe already dealt, from 0.0 (fresh) to 1.0 (empty).
    ///
    /// Tables use this to decide when to reshuffle; the shoe itself never
    /// reshuffles.
    #[must_use]
    pub fn penetration(&self) -> f64 {
        self.dealt_count() as f64 / self.original_size() as f64
    }

    /// How many copies of each distinct card are still undealt.
    ///
    /// Cards with no copies left are absent from the map.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The deck has {} cards remaining.", self.remaining_count())
    }
}

/// Every (rank, suit) pair `num_decks` times, in canonical order.
fn compose(num_decks: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(num_decks * CARDS_PER_DECK);
    for _ in 0..num_decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::from_parts(rank, suit));
            }
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_compose_standard_deck() {
        let deck = compose(1);
        assert_eq!(deck.len(), 52);

        let mut unique = deck.clone();
        unique.sort_by_key(|c| (c.suit(), c.rank()));
        unique.dedup();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_kind_counts_per_deck() {
        let mut rng = GameRng::new(3);
        let shoe = Shoe::new(2, &mut rng).unwrap();
        let count = |kind| shoe.cards.iter().filter(|c| c.kind() == kind).count();

        assert_eq!(count(CardKind::Ace), 8);
        assert_eq!(count(CardKind::Face), 24);
        assert_eq!(count(CardKind::Number), 72);
    }

    #[test]
    fn test_invalid_deck_count() {
        let mut rng = GameRng::new(0);
        assert_eq!(Shoe::new(0, &mut rng).unwrap_err(), CardError::InvalidDeckCount(0));
        assert_eq!(Shoe::new(9, &mut rng).unwrap_err(), CardError::InvalidDeckCount(9));
    }

    #[test]
    fn test_shuffled() {
        let mut rng = GameRng::new(42);
        let shoe = Shoe::new(1, &mut rng).unwrap();
        assert_ne!(shoe.cards, compose(1));
    }

    #[test]
    fn test_two_stage_order() {
        for (num_decks, seed) in [(1, 42), (6, 7)] {
            let mut rng = GameRng::new(seed);
            let mut pool = compose(num_decks);
            rng.shuffle(&mut pool);
            let shuffled_only = pool.clone();

            let mut expected = Vec::with_capacity(pool.len());
            while !pool.is_empty() {
                let pick = rng.gen_range_usize(0..pool.len());
                expected.push(pool.remove(pick));
            }

            let shoe = Shoe::new(num_decks, &mut GameRng::new(seed)).unwrap();
            assert_eq!(shoe.cards, expected);
            assert_ne!(shoe.cards, shuffled_only);

            // draws alone, without the first shuffle, give another order
            let mut draw_rng = GameRng::new(seed);
            let mut unshuffled = compose(num_decks);
            let mut draws_only = Vec::with_capacity(unshuffled.len());
            while !unshuffled.is_empty() {
                let pick = draw_rng.gen_range_usize(0..unshuffled.len());
                draws_only.push(unshuffled.remove(pick));
            }
            assert_ne!(shoe.cards, draws_only);
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Shoe::new(4, &mut GameRng::new(99)).unwrap();
        let b = Shoe::new(4, &mut GameRng::new(99)).unwrap();
        assert_eq!(a.cards, b.cards);

        let c = Shoe::new(4, &mut GameRng::new(100)).unwrap();
        assert_ne!(a.cards, c.cards);
    }

    #[test]
    fn test_single_deck() {
        let mut rng = GameRng::new(5);
        let deck = Deck::single_deck(&mut rng);
        assert_eq!(deck.num_decks(), 1);
        assert_eq!(deck.remaining_count(), 52);
    }

    #[test]
    fn test_remove_until_empty() {
        let mut rng = GameRng::new(8);
        let mut shoe = Shoe::new(1, &mut rng).unwrap();

        for expected in (0..52).rev() {
            shoe.remove_top().unwrap();
            assert_eq!(shoe.remaining_count(), expected);
        }

        assert!(shoe.is_empty());
        assert_eq!(shoe.remove_top(), Err(CardError::EmptyDeck));
        assert_eq!(shoe.remove_top(), Err(CardError::EmptyDeck));
    }

    #[test]
    fn test_penetration() {
        let mut rng = GameRng::new(1);
        let mut shoe = Shoe::new(2, &mut rng).unwrap();
        assert_eq!(shoe.penetration(), 0.0);

        for _ in 0..26 {
            shoe.remove_top().unwrap();
        }
        assert_eq!(shoe.dealt_count(), 26);
        assert!((shoe.penetration() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_composition() {
        let mut rng = GameRng::new(11);
        let mut shoe = Shoe::new(3, &mut rng).unwrap();

        let fresh = shoe.composition();
        assert_eq!(fresh.len(), 52);
        assert!(fresh.values().all(|&n| n == 3));

        let dealt = shoe.remove_top().unwrap();
        let after = shoe.composition();
        assert_eq!(after[&dealt], 2);
        assert_eq!(after.values().sum::<usize>(), shoe.remaining_count());
    }

    #[test]
    fn test_display() {
        let mut rng = GameRng::new(2);
        let mut shoe = Shoe::new(1, &mut rng).unwrap();
        assert_eq!(shoe.to_string(), "The deck has 52 cards remaining.");
        shoe.remove_top().unwrap();
        assert_eq!(shoe.to_string(), "The deck has 51 cards remaining.");
    }
}
