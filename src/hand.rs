//! Five-card hands and their poker categories.

use core::fmt;

use crate::card::{Card, Rank};
use crate::error::HandError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Poker hand category, from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandCategory {
    /// No other category applies.
    HighCard,
    /// One rank twice, three other ranks once.
    OnePair,
    /// Two ranks twice each.
    TwoPair,
    /// One rank three times, two other ranks once.
    ThreeOfAKind,
    /// Five consecutive ranks, not all of one suit.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of one rank and two of another.
    FullHouse,
    /// One rank four times.
    FourOfAKind,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// A straight flush that holds a King.
    RoyalFlush,
}

impl HandCategory {
    /// All categories, highest first.
    pub const PRECEDENCE: [Self; 10] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::OnePair,
        Self::HighCard,
    ];

    /// Returns the display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand of five distinct cards.
///
/// Cards keep the order they were given in, which is also the order used
/// when the hand is displayed. Equality ignores that order.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    /// Cards in input order.
    cards: [Card; HAND_SIZE],
    /// Number of cards per rank, indexed by [`Rank::index`].
    rank_counts: [u8; Rank::ALL.len()],
}

impl Hand {
    /// Creates a hand from exactly five distinct cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::WrongHandSize`] if `cards` does not hold five
    /// cards, or [`HandError::DuplicateCard`] if a card appears twice. The
    /// size is checked first.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongHandSize(cards.len()))?;

        for (i, card) in cards.iter().enumerate() {
            if cards[i + 1..].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }

        let mut rank_counts = [0; Rank::ALL.len()];
        for card in &cards {
            rank_counts[card.rank.index()] += 1;
        }

        Ok(Self { cards, rank_counts })
    }

    /// Returns the cards in input order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns how many cards of the given rank the hand holds.
    #[must_use]
    pub const fn count_of(&self, rank: Rank) -> u8 {
        self.rank_counts[rank.index()]
    }

    /// Number of ranks that appear exactly `n` times.
    fn ranks_with_count(&self, n: u8) -> usize {
        self.rank_counts.iter().filter(|&&count| count == n).count()
    }

    /// Returns whether the hand is one pair.
    #[must_use]
    pub fn is_one_pair(&self) -> bool {
        self.ranks_with_count(2) == 1 && self.ranks_with_count(1) == 3
    }

    /// Returns whether the hand is two pair.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        self.ranks_with_count(2) == 2
    }

    /// Returns whether the hand is three of a kind.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        self.ranks_with_count(3) == 1 && self.ranks_with_count(1) == 2
    }

    /// Returns whether the hand is a full house.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        self.ranks_with_count(3) == 1 && self.ranks_with_count(2) == 1
    }

    /// Returns whether the hand is four of a kind.
    #[must_use]
    pub fn is_four_of_a_kind(&self) -> bool {
        self.ranks_with_count(4) == 1
    }

    /// Returns whether all five cards share a suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Sorted ranks form a consecutive run. Ace to Two and Ace to Ten steps
    /// always pass, so both A-2-3-4-5 and A-T-J-Q-K are runs.
    fn is_loose_straight(&self) -> bool {
        let mut ranks = self.cards.map(|card| card.rank);
        ranks.sort_unstable();

        ranks.windows(2).all(|pair| match (pair[0], pair[1]) {
            (Rank::Ace, Rank::Two | Rank::Ten) => true,
            (current, next) => current.next() == next,
        })
    }

    /// Returns whether the hand is a straight that is not also a flush.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        self.is_loose_straight() && !self.is_flush()
    }

    /// Returns whether the hand is a straight flush.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        self.is_loose_straight() && self.is_flush()
    }

    /// Returns whether the hand is a royal flush.
    ///
    /// A straight flush qualifies as soon as it holds a King.
    #[must_use]
    pub fn is_royal_flush(&self) -> bool {
        self.is_straight_flush() && self.count_of(Rank::King) > 0
    }

    /// Returns whether no other category applies.
    #[must_use]
    pub fn is_high_card(&self) -> bool {
        !self.is_one_pair()
            && !self.is_two_pair()
            && !self.is_three_of_a_kind()
            && !self.is_straight()
            && !self.is_flush()
            && !self.is_full_house()
            && !self.is_four_of_a_kind()
            && !self.is_straight_flush()
            && !self.is_royal_flush()
    }

    /// Returns whether the hand satisfies the predicate for `category`.
    ///
    /// More than one category can match, [`Hand::category`] picks the
    /// highest.
    #[must_use]
    pub fn matches(&self, category: HandCategory) -> bool {
        match category {
            HandCategory::HighCard => self.is_high_card(),
            HandCategory::OnePair => self.is_one_pair(),
            HandCategory::TwoPair => self.is_two_pair(),
            HandCategory::ThreeOfAKind => self.is_three_of_a_kind(),
            HandCategory::Straight => self.is_straight(),
            HandCategory::Flush => self.is_flush(),
            HandCategory::FullHouse => self.is_full_house(),
            HandCategory::FourOfAKind => self.is_four_of_a_kind(),
            HandCategory::StraightFlush => self.is_straight_flush(),
            HandCategory::RoyalFlush => self.is_royal_flush(),
        }
    }

    /// Returns the highest category this hand belongs to.
    ///
    /// ```
    /// use pokerface::{Hand, HandCategory};
    ///
    /// let hand: Hand = "AC KC QC JC TC".parse().unwrap();
    /// assert_eq!(hand.category(), HandCategory::RoyalFlush);
    /// ```
    #[must_use]
    pub fn category(&self) -> HandCategory {
        HandCategory::PRECEDENCE
            .into_iter()
            .find(|&category| self.matches(category))
            .unwrap_or(HandCategory::HighCard)
    }

    /// Returns the display name of the hand's category.
    #[must_use]
    pub fn hand_name(&self) -> &'static str {
        self.category().name()
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        // Both hands hold five distinct cards.
        self.cards.iter().all(|card| other.cards.contains(card))
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
