//! Player handles.
//!
//! A player is owned by the caller's turn manager and records which space
//! it stands on by index. Handles are only minted by the board, and only
//! the board moves them, so the handle and the space's occupant set
//! always change together.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-chosen identity of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A token on the board.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Player {
    id: PlayerId,
    position: usize,
}

impl Player {
    pub(crate) fn new(id: PlayerId, position: usize) -> Self {
        Player { id, position }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Index of the space this player stands on.
    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn set_position(&mut self, index: usize) {
        self.position = index;
    }
}
