//! A single board cell.

use std::collections::BTreeSet;

use serde::Serialize;

use super::color::{Color, Landmark, SpaceColor};
use super::player::PlayerId;

/// One cell of the board.
///
/// Index, color and label are fixed when the board is built. The occupant
/// set is only changed by the board while relocating a player, so a space
/// handed out by reference can be read but never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Space {
    pub(crate) index: usize,
    pub(crate) color: SpaceColor,
    pub(crate) label: Option<&'static str>,
    pub(crate) occupants: BTreeSet<PlayerId>,
    pub(crate) is_start: bool,
    pub(crate) is_end: bool,
}

impl Space {
    pub(crate) fn new(index: usize, color: SpaceColor, label: Option<&'static str>) -> Self {
        Space {
            index,
            color,
            label,
            occupants: BTreeSet::new(),
            is_start: false,
            is_end: false,
        }
    }

    /// Position on the board, 0-based.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Color role used by resolution: terminal, cycling or landmark marker.
    pub fn space_color(&self) -> SpaceColor {
        self.color
    }

    /// Palette color to paint this space.
    pub fn color(&self) -> Color {
        self.color.color()
    }

    /// Display label, if the space has one.
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// True only for index 0.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// True only for the last index.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Returns the landmark on this space, if it is a special space.
    pub fn landmark(&self) -> Option<Landmark> {
        match self.color {
            SpaceColor::Marker(l) => Some(l),
            _ => None,
        }
    }

    /// True for the five landmark spaces.
    pub fn is_special(&self) -> bool {
        self.landmark().is_some()
    }

    /// Players currently standing here, in id order.
    pub fn occupants(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.occupants.iter().copied()
    }

    /// True if `player` stands here.
    pub fn is_occupied_by(&self, player: PlayerId) -> bool {
        self.occupants.contains(&player)
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }
}
