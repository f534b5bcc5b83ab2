//! Single-turn movement.
//!
//! Rules are applied in a fixed order:
//!
//! 1. A skip card never moves the player.
//! 2. A player already on the terminal space for its direction (end when
//!    moving forward, start in reverse) stays put, whatever the card.
//! 3. A go-to-special card jumps to the named landmark from anywhere else,
//!    in either direction, backward if need be.
//! 4. Otherwise the board is scanned one space at a time in the direction
//!    of travel. The terminal space halts the scan whatever its color; a
//!    single card stops on the first space of its color, a double card on
//!    the second.
//!
//! Computing the destination never touches the board. The move itself goes
//! through the board's relocate step so the player's record and the
//! occupant sets change together.

use serde::Serialize;
use tracing::{debug, error, instrument, trace, warn};

use crate::board::{Board, BoardError, CandyColor, Card, Direction, Player, PlayerId, Walk};

/// Errors raised while resolving a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("reverse scan from space {from} ran off the board without reaching the start space")]
    ScanExhausted { from: usize },
}

/// The outcome of one resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub player: PlayerId,
    pub from: usize,
    pub to: usize,
    /// The card that caused the move; `None` for a send-to-middle.
    pub card: Option<Card>,
}

impl Resolution {
    /// Returns true if the player changed space.
    pub fn is_move(&self) -> bool {
        self.from != self.to
    }
}

/// Receives a callback each time a move changes occupancy.
///
/// No-op outcomes (skips, clamps, landing where the player already stood)
/// are not reported.
pub trait MoveObserver {
    fn player_moved(&mut self, resolution: &Resolution);
}

impl<F: FnMut(&Resolution)> MoveObserver for F {
    fn player_moved(&mut self, resolution: &Resolution) {
        self(resolution)
    }
}

/// Computes where a player standing on `from` ends up after `card`.
pub fn destination(
    board: &Board,
    from: usize,
    card: Card,
    direction: Direction,
) -> Result<usize, ResolveError> {
    let here = board.space_at(from)?;

    // skips and terminal clamps both stay on `from`
    let at_terminal = match direction {
        Direction::Forward => here.is_end(),
        Direction::Reverse => here.is_start(),
    };
    if at_terminal || card == Card::Skip {
        return Ok(from);
    }

    let (color, wanted) = match card {
        Card::Skip => return Ok(from),
        Card::GoToSpecial(landmark) => return Ok(board.special_index(landmark)),
        Card::Single(color) => (color, 1),
        Card::Double(color) => (color, 2),
    };

    match scan(board.iterate_from(from, direction)?, color, wanted) {
        Some(to) => Ok(to),
        None => match direction {
            Direction::Forward => Ok(board.end_index()),
            Direction::Reverse => {
                error!(from, ?card, "reverse scan exhausted without reaching start");
                Err(ResolveError::ScanExhausted { from })
            }
        },
    }
}

/// Walks away from the player and returns the index where the scan stops,
/// or `None` if the walk ran out first.
fn scan(walk: Walk<'_>, color: CandyColor, wanted: usize) -> Option<usize> {
    let direction = walk.direction();
    let mut seen = 0;
    for space in walk {
        let halts = match direction {
            Direction::Forward => space.is_end(),
            Direction::Reverse => space.is_start(),
        };
        if halts {
            trace!(index = space.index(), "scan halted at terminal space");
            return Some(space.index());
        }
        if space.space_color().matches(color) {
            seen += 1;
            trace!(index = space.index(), seen, "candidate");
            if seen == wanted {
                return Some(space.index());
            }
        }
    }
    None
}

/// Resolves one card for one player and moves the player.
///
/// The returned resolution has `from == to` when the card leaves the player
/// where it was; occupancy is untouched in that case.
#[instrument(level = "debug", skip(board, player), fields(player = %player.id()))]
pub fn resolve(
    board: &mut Board,
    player: &mut Player,
    card: Card,
    direction: Direction,
) -> Result<Resolution, ResolveError> {
    let from = board
        .position_of(player)
        .map_err(|e| {
            warn!(error = %e, "player handle does not match the board");
            e
        })?
        .index();
    let to = destination(board, from, card, direction)?;
    board.relocate(player, to)?;
    debug!(from, to, "resolved move");
    Ok(Resolution {
        player: player.id(),
        from,
        to,
        card: Some(card),
    })
}

/// Like [`resolve`], then notifies `observer` if the player moved.
pub fn resolve_observed<O: MoveObserver + ?Sized>(
    board: &mut Board,
    player: &mut Player,
    card: Card,
    direction: Direction,
    observer: &mut O,
) -> Result<Resolution, ResolveError> {
    let resolution = resolve(board, player, card, direction)?;
    if resolution.is_move() {
        observer.player_moved(&resolution);
    }
    Ok(resolution)
}

/// Moves a player straight to the middle space.
pub fn send_to_middle(board: &mut Board, player: &mut Player) -> Result<Resolution, BoardError> {
    let from = board.position_of(player)?.index();
    let to = board.middle_index();
    board.relocate(player, to)?;
    debug!(player = %player.id(), from, to, "sent to middle");
    Ok(Resolution {
        player: player.id(),
        from,
        to,
        card: None,
    })
}

/// Like [`send_to_middle`], then notifies `observer` if the player moved.
pub fn send_to_middle_observed<O: MoveObserver + ?Sized>(
    board: &mut Board,
    player: &mut Player,
    observer: &mut O,
) -> Result<Resolution, BoardError> {
    let resolution = send_to_middle(board, player)?;
    if resolution.is_move() {
        observer.player_moved(&resolution);
    }
    Ok(resolution)
}
