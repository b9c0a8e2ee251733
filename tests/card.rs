//! Card and code tests.

use pokerface::{Card, DECK_SIZE, HandError, Rank, Suit};

#[test]
fn card_codes_round_trip() {
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let card = Card::from_codes(rank.code(), suit.code()).unwrap();
            assert_eq!(card.rank.code(), rank.code());
            assert_eq!(card.suit.code(), suit.code());
            assert_eq!(card, Card::new(rank, suit));
        }
    }
}

#[test]
fn ten_of_clubs() {
    let card = Card::from_codes('T', 'C').unwrap();
    assert_eq!(card.rank, Rank::Ten);
    assert_eq!(card.suit, Suit::Clubs);
    assert_eq!(card.to_string(), "TC");
}

#[test]
fn invalid_card_codes() {
    let err = Card::from_codes('T', 'T').unwrap_err();
    assert_eq!(err, HandError::InvalidCard { rank: 'T', suit: 'T' });
    assert_eq!(err.to_string(), "Invalid Card");

    // Either half failing gives the same message.
    assert_eq!(Card::from_codes('1', 'H').unwrap_err().to_string(), "Invalid Card");
    assert_eq!(Card::from_codes('A', 'X').unwrap_err().to_string(), "Invalid Card");
    // Codes are case sensitive.
    assert!(Card::from_codes('a', 's').is_err());
}

#[test]
fn rank_order_is_ace_low() {
    assert!(Rank::Ace < Rank::Two);
    assert!(Rank::Ten < Rank::Jack);
    assert!(Rank::Queen < Rank::King);

    let mut ranks = [Rank::King, Rank::Ace, Rank::Ten, Rank::Two];
    ranks.sort();
    assert_eq!(ranks, [Rank::Ace, Rank::Two, Rank::Ten, Rank::King]);

    assert!(Rank::ALL.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn next_rank_wraps() {
    assert_eq!(Rank::Ace.next(), Rank::Two);
    assert_eq!(Rank::Nine.next(), Rank::Ten);
    assert_eq!(Rank::Queen.next(), Rank::King);
    assert_eq!(Rank::King.next(), Rank::Ace);

    for pair in Rank::ALL.windows(2) {
        assert_eq!(pair[0].next(), pair[1]);
    }
}

#[test]
fn card_from_str() {
    let card: Card = "QH".parse().unwrap();
    assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
    assert_eq!("Q".parse::<Card>().unwrap_err(), HandError::InvalidCardCode);
}

#[test]
fn all_cards_are_distinct() {
    let cards: Vec<Card> = Card::all().collect();
    assert_eq!(cards.len(), DECK_SIZE);

    for (i, card) in cards.iter().enumerate() {
        assert!(!cards[i + 1..].contains(card));
    }
}
