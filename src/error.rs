//! Error types for card, hand, and deck operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while building a card or a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The rank or suit code does not decode to a card.
    #[error("Invalid Card")]
    InvalidCard {
        /// The rank code that was given.
        rank: char,
        /// The suit code that was given.
        suit: char,
    },
    /// A card code has fewer than two characters.
    #[error("Invalid Card Code")]
    InvalidCardCode,
    /// The hand does not hold exactly five cards.
    #[error("A hand must contain 5 cards")]
    WrongHandSize(usize),
    /// The same card appears twice in the hand.
    #[error("Duplicate Card In Hand")]
    DuplicateCard(Card),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The dealt cards do not form a valid hand.
    #[error(transparent)]
    InvalidHand(#[from] HandError),
}

/// A hand error tied to the input line that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {error}")]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed input line.
    pub input: String,
    /// The underlying error.
    #[source]
    pub error: HandError,
}
