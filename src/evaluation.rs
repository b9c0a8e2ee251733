//! Line-by-line hand evaluation.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use log::{trace, warn};
#[cfg(feature = "std")]
use std::io::{self, BufRead};

use crate::error::{HandError, LineError};
use crate::hand::{Hand, HandCategory};
use crate::options::{ErrorPolicy, EvaluateOptions};
use crate::parser::make_hand_from_str;

/// A parsed hand and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The parsed hand.
    pub hand: Hand,
    /// The hand's highest category.
    pub category: HandCategory,
}

impl Evaluation {
    /// Classifies a hand.
    #[must_use]
    pub fn of(hand: Hand) -> Self {
        Self {
            hand,
            category: hand.category(),
        }
    }

    /// Returns the hand's card codes in input order.
    #[must_use]
    pub fn rendering(&self) -> String {
        self.hand.to_string()
    }

    /// Returns the category display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.category.name()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.hand, self.category)
    }
}

/// Trims and parses a line, then classifies the hand.
///
/// ```
/// use pokerface::evaluate;
///
/// let evaluation = evaluate("  5S 6D 5C 4S 3H ").unwrap();
/// assert_eq!(evaluation.to_string(), "5S 6D 5C 4S 3H => One Pair");
/// ```
///
/// # Errors
///
/// Returns the [`HandError`] raised while parsing the line.
pub fn evaluate(line: &str) -> Result<Evaluation, HandError> {
    make_hand_from_str(line.trim()).map(Evaluation::of)
}

/// Reads newline-separated lines, replacing invalid UTF-8 with U+FFFD.
///
/// A line that does not decode still reaches [`evaluate_lines`] and fails
/// there like any other malformed hand. Only I/O errors are returned.
#[cfg(feature = "std")]
pub fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}

/// Evaluates each line, applying the options' error policy.
///
/// Lines are numbered from 1. The returned iterator is lazy.
pub fn evaluate_lines<I>(lines: I, options: &EvaluateOptions) -> Evaluations<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Evaluations {
        lines: lines.into_iter(),
        options: *options,
        line: 0,
        done: false,
    }
}

/// Iterator returned by [`evaluate_lines`].
#[derive(Debug, Clone)]
pub struct Evaluations<I> {
    lines: I,
    options: EvaluateOptions,
    line: usize,
    done: bool,
}

impl<I> Iterator for Evaluations<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Evaluation, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for raw in self.lines.by_ref() {
            self.line += 1;
            let input = raw.as_ref().trim();
            if input.is_empty() && self.options.skip_blank_lines {
                continue;
            }

            match evaluate(input) {
                Ok(evaluation) => {
                    trace!("line {}: {evaluation}", self.line);
                    return Some(Ok(evaluation));
                }
                Err(error) => {
                    let error = LineError {
                        line: self.line,
                        input: input.to_string(),
                        error,
                    };

                    match self.options.error_policy {
                        ErrorPolicy::Skip => {
                            warn!("skipping {error} ({:?})", error.input);
                        }
                        ErrorPolicy::Report => return Some(Err(error)),
                        ErrorPolicy::Abort => {
                            self.done = true;
                            return Some(Err(error));
                        }
                    }
                }
            }
        }

        self.done = true;
        None
    }
}

impl<I> core::iter::FusedIterator for Evaluations<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}
