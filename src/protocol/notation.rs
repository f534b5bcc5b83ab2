//! Compact text notation for cards.
//!
//! One token per card:
//!
//! - `S` skip
//! - `r`, `o`, `y`, `b`, `g` a single of that color
//! - `rr`, `bb`, ... a double of that color
//! - `@1` ... `@5` go to the k-th special space
//!
//! A hand or a draw log is a whitespace-separated list of tokens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::{CandyColor, Card, CardError, CardValue};

/// Errors that can occur when parsing card notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown color letter '{0}'")]
    UnknownColor(char),

    #[error("unrecognized card '{0}'")]
    UnknownCard(String),

    #[error(transparent)]
    Card(#[from] CardError),
}

/// Parses a single card token.
pub fn parse_card(s: &str) -> Result<Card, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }

    if s == "S" {
        return Ok(Card::Skip);
    }

    if let Some(rank) = s.strip_prefix('@') {
        let rank: u8 = rank
            .parse()
            .map_err(|_| NotationError::UnknownCard(s.to_string()))?;
        return Ok(Card::new(None, CardValue::GoToSpecial(rank))?);
    }

    let letters: Vec<char> = s.chars().collect();
    let color = CandyColor::from_letter(letters[0]).ok_or(NotationError::UnknownColor(letters[0]))?;
    match letters.len() {
        1 => Ok(Card::Single(color)),
        2 if letters[1] == letters[0] => Ok(Card::Double(color)),
        _ => Err(NotationError::UnknownCard(s.to_string())),
    }
}

/// Parses a whitespace-separated list of card tokens.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    s.split_whitespace().map(parse_card).collect()
}

/// Formats a card as its notation token.
pub fn format_card(card: &Card) -> String {
    match card {
        Card::Skip => "S".to_string(),
        Card::Single(c) => c.letter().to_string(),
        Card::Double(c) => format!("{0}{0}", c.letter()),
        Card::GoToSpecial(l) => format!("@{}", l.rank()),
    }
}

/// Formats cards as a space-separated list.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_card(self))
    }
}

impl FromStr for Card {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Card, NotationError> {
        parse_card(s)
    }
}
