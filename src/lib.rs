//! A five-card poker hand classifier with optional `no_std` support.
//!
//! Hands are written as space-separated card codes, rank then suit
//! (`"3D 6S 9H 2S KH"`). The crate parses them into a [`Hand`] and reports
//! the hand's [`HandCategory`], from High Card to Royal Flush.
//!
//! # Example
//!
//! ```
//! use pokerface::{Hand, HandCategory};
//!
//! let hand: Hand = "TC 9C 8C 7C 6C".parse().unwrap();
//! assert_eq!(hand.category(), HandCategory::StraightFlush);
//! assert_eq!(hand.to_string(), "TC 9C 8C 7C 6C");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod evaluation;
pub mod hand;
pub mod options;
pub mod parser;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, HandError, LineError};
pub use evaluation::{Evaluation, Evaluations, evaluate, evaluate_lines};
#[cfg(feature = "std")]
pub use evaluation::read_lines;
pub use hand::{HAND_SIZE, Hand, HandCategory};
pub use options::{ErrorPolicy, EvaluateOptions};
pub use parser::{make_hand_from_codes, make_hand_from_str};
