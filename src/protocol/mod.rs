//! Text notation.
//!
//! Cards travel between the deck manager, logs and tests as short tokens;
//! this module parses and formats them.

pub mod notation;

pub use notation::{format_card, format_cards, parse_card, parse_cards, NotationError};
