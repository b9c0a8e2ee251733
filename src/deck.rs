//! A shuffled deck for dealing random hands.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::DealError;
use crate::hand::{HAND_SIZE, Hand};

/// A single 52-card deck shuffled with a seeded generator.
///
/// The same seed always deals the same hands.
///
/// ```
/// use pokerface::Deck;
///
/// let mut deck = Deck::new(42);
/// let hand = deck.deal_hand().unwrap();
/// assert_eq!(deck.remaining(), 47);
/// let _ = hand.category();
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left, drawn from the back.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_cards(&mut rng);
        Self { cards, rng }
    }

    fn create_cards(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend(Card::all());
        cards.shuffle(rng);
        cards
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Deals the next five cards as a hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than five cards remain,
    /// or [`DealError::InvalidHand`] if the dealt cards are rejected.
    pub fn deal_hand(&mut self) -> Result<Hand, DealError> {
        let Some(start) = self.cards.len().checked_sub(HAND_SIZE) else {
            return Err(DealError::NotEnoughCards);
        };

        let cards: Vec<Card> = self.cards.drain(start..).rev().collect();
        Ok(Hand::new(&cards)?)
    }

    /// Puts all cards back and shuffles the deck.
    pub fn reshuffle(&mut self) {
        debug!("reshuffling deck with {} cards left", self.cards.len());
        self.cards = Self::create_cards(&mut self.rng);
    }
}
