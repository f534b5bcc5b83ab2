//! Board configuration.

use serde::{Deserialize, Serialize};

use crate::board::{special_indices, Board, BoardError, STANDARD_COLUMNS, STANDARD_ROWS};

/// Errors that can occur when loading a board configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse board config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid board config: {0}")]
    Board(#[from] BoardError),
}

/// Board shape, loadable from JSON. Missing fields take the standard
/// 8 x 8 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: STANDARD_ROWS,
            columns: STANDARD_COLUMNS,
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON config such as `{"rows": 6, "columns": 4}`.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that a board of this shape can be built.
    pub fn validate(&self) -> Result<(), BoardError> {
        special_indices(self.rows, self.columns).map(|_| ())
    }

    pub fn spaces(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Builds the board.
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::new(self.rows, self.columns)
    }
}
