//! Board representation.
//!
//! Contains the palette and landmark tables, spaces, cards, player handles,
//! and the board arena itself.

pub mod card;
pub mod color;
pub mod layout;
pub mod player;
pub mod space;

pub use card::{Card, CardError, CardValue};
pub use color::{
    CandyColor, Color, Landmark, LandmarkInfo, SpaceColor, ALL_COLORS, ALL_LANDMARKS, CYCLE,
    CYCLE_LEN, LANDMARK_COUNT, LANDMARK_INFO,
};
pub use layout::{
    special_indices, Board, BoardError, Direction, Walk, END_LABEL, MIN_SPACES, STANDARD_COLUMNS,
    STANDARD_ROWS, START_LABEL,
};
pub use player::{Player, PlayerId};
pub use space::Space;
