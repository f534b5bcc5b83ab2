//! Cards drawn by the turn manager.
//!
//! A card is an immutable value telling the resolver how far to move.
//! Colored values only carry a `CandyColor`, so a card can never ask for
//! a white or landmark-colored space.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::color::{CandyColor, Color, Landmark};

/// Errors from building a card out of loose parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("card color {0:?} is not one of the cycling colors")]
    NonCyclingColor(Color),

    #[error("single and double cards need a color")]
    ColorlessValue,

    #[error("special rank must be 1..=5, got {0}")]
    InvalidSpecialRank(u8),
}

/// The value printed on a card, without its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardValue {
    Skip,
    Single,
    Double,
    /// Teleport to the k-th special space, k in 1..=5.
    GoToSpecial(u8),
}

/// A drawn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Lose the turn.
    Skip,
    /// Move to the next space of this color.
    Single(CandyColor),
    /// Move to the second next space of this color.
    Double(CandyColor),
    /// Jump straight to a landmark.
    GoToSpecial(Landmark),
}

impl Card {
    /// Builds a card from a palette color and a value.
    ///
    /// The color is ignored for `Skip` and `GoToSpecial`. For `Single` and
    /// `Double` it must be present and cycling.
    pub fn new(color: Option<Color>, value: CardValue) -> Result<Card, CardError> {
        let candy = |color: Option<Color>| -> Result<CandyColor, CardError> {
            let color = color.ok_or(CardError::ColorlessValue)?;
            color.as_cycling().ok_or_else(|| {
                warn!(?color, ?value, "rejected card with a non-cycling color");
                CardError::NonCyclingColor(color)
            })
        };
        match value {
            CardValue::Skip => Ok(Card::Skip),
            CardValue::Single => Ok(Card::Single(candy(color)?)),
            CardValue::Double => Ok(Card::Double(candy(color)?)),
            CardValue::GoToSpecial(rank) => Landmark::from_rank(rank)
                .map(Card::GoToSpecial)
                .ok_or(CardError::InvalidSpecialRank(rank)),
        }
    }

    /// Returns the card's value.
    pub const fn value(self) -> CardValue {
        match self {
            Card::Skip => CardValue::Skip,
            Card::Single(_) => CardValue::Single,
            Card::Double(_) => CardValue::Double,
            Card::GoToSpecial(l) => CardValue::GoToSpecial(l.rank()),
        }
    }

    /// Returns the card's color, if its value uses one.
    pub const fn color(self) -> Option<CandyColor> {
        match self {
            Card::Single(c) | Card::Double(c) => Some(c),
            Card::Skip | Card::GoToSpecial(_) => None,
        }
    }
}
