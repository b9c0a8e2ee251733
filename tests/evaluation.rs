//! Batch evaluation and dealing tests.

use std::io::Cursor;

use pokerface::{
    Card, DealError, Deck, ErrorPolicy, EvaluateOptions, HandCategory, HandError, Rank, Suit,
    evaluate, evaluate_lines, read_lines,
};

const LINES: [&str; 4] = ["3D 6S 9H 2S KH", "AC KC QC", "", "  5S 5D 4C 4S 3H  "];

#[test]
fn evaluate_single_line() {
    let evaluation = evaluate(" 3D 6S 9H 2S KH\n").unwrap();
    assert_eq!(evaluation.rendering(), "3D 6S 9H 2S KH");
    assert_eq!(evaluation.name(), "High Card");
    assert_eq!(evaluation.category, HandCategory::HighCard);
    assert_eq!(evaluation.to_string(), "3D 6S 9H 2S KH => High Card");

    assert_eq!(evaluate("AC KC").unwrap_err(), HandError::WrongHandSize(2));
}

#[test]
fn abort_stops_at_first_failure() {
    let results: Vec<_> = evaluate_lines(LINES, &EvaluateOptions::default()).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().name(), "High Card");

    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.input, "AC KC QC");
    assert_eq!(err.error, HandError::WrongHandSize(3));
    assert_eq!(err.to_string(), "line 2: A hand must contain 5 cards");
}

#[test]
fn report_keeps_going() {
    let options = EvaluateOptions::default().with_error_policy(ErrorPolicy::Report);
    let results: Vec<_> = evaluate_lines(LINES, &options).collect();
    assert_eq!(results.len(), 3);
    assert!(results[1].is_err());

    let last = results[2].as_ref().unwrap();
    assert_eq!(last.to_string(), "5S 5D 4C 4S 3H => Two Pair");
}

#[test]
fn skip_drops_failures() {
    let options = EvaluateOptions::default().with_error_policy(ErrorPolicy::Skip);
    let names: Vec<_> = evaluate_lines(LINES, &options)
        .map(|result| result.unwrap().name())
        .collect();
    assert_eq!(names, ["High Card", "Two Pair"]);
}

#[test]
fn blank_lines_can_be_reported() {
    let options = EvaluateOptions::default()
        .with_error_policy(ErrorPolicy::Report)
        .with_skip_blank_lines(false);
    let results: Vec<_> = evaluate_lines(LINES, &options).collect();
    assert_eq!(results.len(), 4);

    let blank = results[2].as_ref().unwrap_err();
    assert_eq!(blank.line, 3);
    assert_eq!(blank.error, HandError::InvalidCardCode);
}

#[test]
fn options_builder_sets_fields() {
    let options = EvaluateOptions::default();
    assert_eq!(options.error_policy, ErrorPolicy::Abort);
    assert!(options.skip_blank_lines);

    let options = options
        .with_error_policy(ErrorPolicy::Skip)
        .with_skip_blank_lines(false);
    assert_eq!(options.error_policy, ErrorPolicy::Skip);
    assert!(!options.skip_blank_lines);
}

#[test]
fn deck_deals_ten_hands() {
    let mut deck = Deck::new(7);
    assert_eq!(deck.remaining(), 52);

    let mut seen = Vec::new();
    for _ in 0..10 {
        let hand = deck.deal_hand().unwrap();
        let matching = HandCategory::PRECEDENCE
            .into_iter()
            .filter(|&category| hand.matches(category))
            .count();
        assert!(matching >= 1);
        assert!(!hand.is_straight() || !hand.is_flush());
        seen.extend_from_slice(hand.cards());
    }

    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal_hand().unwrap_err(), DealError::NotEnoughCards);

    for (i, card) in seen.iter().enumerate() {
        assert!(!seen[i + 1..].contains(card));
    }

    deck.reshuffle();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn deck_is_seeded() {
    let mut first = Deck::new(42);
    let mut second = Deck::new(42);
    for _ in 0..10 {
        assert_eq!(first.deal_hand().unwrap(), second.deal_hand().unwrap());
    }
}

#[test]
fn invalid_utf8_line_is_reported() {
    let input = Cursor::new(b"3D 6S 9H 2S KH\n\xff\xfe bad\r\n5S 5D 4C 4S 3H\n".to_vec());
    let lines = read_lines(input).map(Result::unwrap);

    let options = EvaluateOptions::default().with_error_policy(ErrorPolicy::Report);
    let results: Vec<_> = evaluate_lines(lines, &options).collect();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().name(), "High Card");
    assert_eq!(results[2].as_ref().unwrap().name(), "Two Pair");

    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(
        err.error,
        HandError::InvalidCard {
            rank: '\u{fffd}',
            suit: '\u{fffd}'
        }
    );
}

#[test]
fn deal_error_keeps_hand_error() {
    let duplicate = HandError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades));
    let err = DealError::from(duplicate);
    assert_eq!(err, DealError::InvalidHand(duplicate));
    assert_eq!(err.to_string(), "Duplicate Card In Hand");
    assert_ne!(err, DealError::NotEnoughCards);
}
