//! Building hands from textual card codes.

extern crate alloc;

use alloc::vec::Vec;
use core::str::FromStr;

use crate::card::Card;
use crate::error::HandError;
use crate::hand::Hand;

/// Builds a hand from a hand code such as `"3D 6S 9H 2S KH"`.
///
/// The text is split on single spaces, so repeated spaces between codes
/// produce an empty code and fail with [`HandError::InvalidCardCode`].
/// Trailing spaces are dropped.
///
/// # Errors
///
/// Returns any error from [`make_hand_from_codes`].
pub fn make_hand_from_str(text: &str) -> Result<Hand, HandError> {
    let codes: Vec<&str> = text.trim_end_matches(' ').split(' ').collect();
    make_hand_from_codes(&codes)
}

/// Builds a hand from card codes such as `["QC", "JC", "KC", "AC", "TC"]`.
///
/// The first character of each code is the rank and the second the suit.
/// Characters after the second are ignored.
///
/// # Errors
///
/// Returns [`HandError::InvalidCardCode`] if a code has fewer than two
/// characters, [`HandError::InvalidCard`] if a code does not decode, and
/// the errors of [`Hand::new`] otherwise.
pub fn make_hand_from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Hand, HandError> {
    let cards = codes
        .iter()
        .map(|code| parse_card(code.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Hand::new(&cards)
}

fn parse_card(code: &str) -> Result<Card, HandError> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(rank), Some(suit)) => Card::from_codes(rank, suit),
        _ => Err(HandError::InvalidCardCode),
    }
}

impl FromStr for Card {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card(s)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        make_hand_from_str(s)
    }
}
