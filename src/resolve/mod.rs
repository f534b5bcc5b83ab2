//! Movement resolution.
//!
//! Turns a drawn card and a direction of travel into a destination space
//! and moves the player there.

pub mod movement;

pub use movement::{
    destination, resolve, resolve_observed, send_to_middle, send_to_middle_observed,
    MoveObserver, Resolution, ResolveError,
};
