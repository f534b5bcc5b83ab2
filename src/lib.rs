//! Gumdrop: movement resolution for a Candy Land style race board.
//!
//! Exposes the board arena, the per-turn resolver, card notation and board
//! configuration. Turn order, deck handling and rendering belong to the
//! caller.

pub mod board;
pub mod config;
pub mod protocol;
pub mod resolve;

pub use board::{Board, BoardError, Card, Direction, Player, PlayerId};
pub use config::{BoardConfig, ConfigError};
pub use resolve::{resolve, MoveObserver, Resolution, ResolveError};
