use pokerface::{Card, Deck, Evaluation, Hand, HandCategory};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Classifies a single hand code such as `"3D 6S 9H 2S KH"`.
#[wasm_bindgen]
pub fn evaluate(line: &str) -> Result<JsValue, JsValue> {
    let evaluation = pokerface::evaluate(line).map_err(js_err)?;
    to_js_value(&JsEvaluation::from(evaluation))
}

/// Classifies every non-blank line of `text`, reporting failures per line.
#[wasm_bindgen]
pub fn evaluate_batch(text: &str) -> Result<JsValue, JsValue> {
    let options = pokerface::EvaluateOptions::default()
        .with_error_policy(pokerface::ErrorPolicy::Report);

    let lines: Vec<JsLine> = pokerface::evaluate_lines(text.lines(), &options)
        .map(|result| match result {
            Ok(evaluation) => JsLine {
                evaluation: Some(JsEvaluation::from(evaluation)),
                error: None,
            },
            Err(err) => JsLine {
                evaluation: None,
                error: Some(JsLineError {
                    line: err.line as u32,
                    input: err.input,
                    message: err.error.to_string(),
                }),
            },
        })
        .collect();

    to_js_value(&lines)
}

#[wasm_bindgen]
pub struct WasmDeck {
    deck: Deck,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            deck: Deck::new(u64::from(seed)),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.deck.remaining() as u32
    }

    pub fn reshuffle(&mut self) {
        self.deck.reshuffle();
    }

    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let hand = self.deck.deal_hand().map_err(js_err)?;
        to_js_value(&JsEvaluation::from(Evaluation::of(hand)))
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: String,
    suit: String,
    code: String,
}

#[derive(Serialize)]
struct JsEvaluation {
    hand: String,
    cards: Vec<JsCard>,
    category: &'static str,
    name: &'static str,
}

impl From<Evaluation> for JsEvaluation {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            hand: evaluation.rendering(),
            cards: cards_to_js(&evaluation.hand),
            category: category_to_str(evaluation.category),
            name: evaluation.name(),
        }
    }
}

#[derive(Serialize)]
struct JsLineError {
    line: u32,
    input: String,
    message: String,
}

#[derive(Serialize)]
struct JsLine {
    evaluation: Option<JsEvaluation>,
    error: Option<JsLineError>,
}

fn cards_to_js(hand: &Hand) -> Vec<JsCard> {
    hand.cards().iter().copied().map(card_to_js).collect()
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.code().to_string(),
        suit: card.suit.code().to_string(),
        code: card.to_string(),
    }
}

fn category_to_str(category: HandCategory) -> &'static str {
    match category {
        HandCategory::HighCard => "HighCard",
        HandCategory::OnePair => "OnePair",
        HandCategory::TwoPair => "TwoPair",
        HandCategory::ThreeOfAKind => "ThreeOfAKind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "FullHouse",
        HandCategory::FourOfAKind => "FourOfAKind",
        HandCategory::StraightFlush => "StraightFlush",
        HandCategory::RoyalFlush => "RoyalFlush",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
