//! The board arena.
//!
//! Spaces live in a single `Vec` indexed by position. Players refer to
//! spaces by index, and each space keeps the ids of the players standing
//! on it. The sequence, colors and labels are fixed at construction; only
//! occupant membership changes afterwards, and only through
//! `Board::relocate`, which updates both sides of a move together.

use serde::Serialize;
use tracing::debug;

use super::color::{CandyColor, Landmark, SpaceColor, ALL_LANDMARKS, LANDMARK_COUNT};
use super::player::{Player, PlayerId};
use super::space::Space;

/// Rows on the standard board.
pub const STANDARD_ROWS: usize = 8;

/// Columns on the standard board.
pub const STANDARD_COLUMNS: usize = 8;

/// Smallest board that can hold five interior special spaces.
pub const MIN_SPACES: usize = 10;

pub const START_LABEL: &str = "Start ->";
pub const END_LABEL: &str = "-> Grandma's House";

/// Errors raised by board construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board needs at least 10 spaces, got {spaces}")]
    TooSmall { spaces: usize },

    #[error("board needs an even number of spaces, got {spaces}")]
    OddSize { spaces: usize },

    #[error("special space {index} is not strictly inside a board of {spaces} spaces")]
    SpecialNotInterior { index: usize, spaces: usize },

    #[error("space index {index} out of range for board of {len} spaces")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("space at index {index} does not belong to this board")]
    ForeignSpace { index: usize },

    #[error("player {0} is already on the board")]
    DuplicatePlayer(PlayerId),

    #[error("player {0} is not on the board")]
    UnknownPlayer(PlayerId),

    #[error("player {player} records space {index} but is not among its occupants")]
    Desynced { player: PlayerId, index: usize },
}

/// Direction of travel along the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Toward the end space.
    Forward,
    /// Toward the start space.
    Reverse,
}

impl Direction {
    /// Maps the turn manager's `reverse` flag to a direction.
    pub const fn from_reverse(reverse: bool) -> Direction {
        if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    pub const fn is_reverse(self) -> bool {
        matches!(self, Direction::Reverse)
    }
}

/// Computes the special-space indices for a board of the given shape.
///
/// Special spaces sit at multiples of `spaces / 5`. Fails when the board is
/// too small or odd, or when the last multiple would land on the end space
/// or past it.
pub const fn special_indices(
    rows: usize,
    columns: usize,
) -> Result<[usize; LANDMARK_COUNT], BoardError> {
    let spaces = rows.saturating_mul(columns);
    if spaces < MIN_SPACES {
        return Err(BoardError::TooSmall { spaces });
    }
    if spaces % 2 != 0 {
        return Err(BoardError::OddSize { spaces });
    }

    let step = spaces / LANDMARK_COUNT;
    let mut indices = [0; LANDMARK_COUNT];
    let mut k = 0;
    while k < LANDMARK_COUNT {
        let index = step * (k + 1);
        if index == 0 || index >= spaces - 1 {
            return Err(BoardError::SpecialNotInterior { index, spaces });
        }
        indices[k] = index;
        k += 1;
    }
    Ok(indices)
}

/// Special-space indices of the standard board, checked at compile time.
const STANDARD_SPECIALS: [usize; LANDMARK_COUNT] =
    match special_indices(STANDARD_ROWS, STANDARD_COLUMNS) {
        Ok(specials) => specials,
        Err(_) => panic!("standard board shape cannot hold five special spaces"),
    };

/// An ordered, fixed-length race track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    spaces: Vec<Space>,
    specials: [usize; LANDMARK_COUNT],
}

impl Board {
    /// Builds a `rows` x `columns` board.
    ///
    /// Nothing is allocated until the shape has been validated, so a
    /// failed build never yields a partial board.
    pub fn new(rows: usize, columns: usize) -> Result<Board, BoardError> {
        let specials = special_indices(rows, columns)?;
        let board = Board::layout(rows, columns, specials);
        debug!(rows, columns, spaces = board.size(), ?specials, "built board");
        Ok(board)
    }

    /// Builds the standard 8 x 8 board.
    pub fn standard() -> Board {
        Board::layout(STANDARD_ROWS, STANDARD_COLUMNS, STANDARD_SPECIALS)
    }

    fn layout(rows: usize, columns: usize, specials: [usize; LANDMARK_COUNT]) -> Board {
        let n = rows * columns;
        let mut spaces = Vec::with_capacity(n);

        let mut start = Space::new(0, SpaceColor::Terminal, Some(START_LABEL));
        start.is_start = true;
        spaces.push(start);

        for i in 1..n - 1 {
            let space = match specials.iter().position(|&s| s == i) {
                Some(k) => {
                    let landmark = ALL_LANDMARKS[k];
                    Space::new(i, SpaceColor::Marker(landmark), Some(landmark.name()))
                }
                None => Space::new(i, SpaceColor::Cycling(CandyColor::for_index(i)), None),
            };
            spaces.push(space);
        }

        let mut end = Space::new(n - 1, SpaceColor::Terminal, Some(END_LABEL));
        end.is_end = true;
        spaces.push(end);

        Board {
            rows,
            columns,
            spaces,
            specials,
        }
    }

    /// Number of spaces.
    pub fn size(&self) -> usize {
        self.spaces.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start_index(&self) -> usize {
        0
    }

    pub fn end_index(&self) -> usize {
        self.spaces.len() - 1
    }

    /// The middle space; with an even count, the one nearer the end.
    pub fn middle_index(&self) -> usize {
        self.spaces.len() / 2
    }

    /// Special-space indices in ascending order.
    pub fn special_indices(&self) -> [usize; LANDMARK_COUNT] {
        self.specials
    }

    pub fn special_index(&self, landmark: Landmark) -> usize {
        self.specials[landmark as usize]
    }

    /// Returns the space at `index`.
    pub fn space_at(&self, index: usize) -> Result<&Space, BoardError> {
        self.spaces.get(index).ok_or(BoardError::IndexOutOfRange {
            index,
            len: self.spaces.len(),
        })
    }

    /// Returns the index of a space borrowed from this board.
    ///
    /// Identity is by address, so an equal-looking space from another
    /// board is rejected.
    pub fn index_of(&self, space: &Space) -> Result<usize, BoardError> {
        match self.spaces.get(space.index) {
            Some(own) if std::ptr::eq(own, space) => Ok(space.index),
            _ => Err(BoardError::ForeignSpace { index: space.index }),
        }
    }

    /// Row-major grid coordinates `(row, column)` of a space.
    pub fn grid_position(&self, index: usize) -> Result<(usize, usize), BoardError> {
        self.space_at(index)?;
        Ok((index / self.columns, index % self.columns))
    }

    /// All spaces in board order.
    pub fn spaces(&self) -> std::slice::Iter<'_, Space> {
        self.spaces.iter()
    }

    /// Walks the spaces strictly after (forward) or strictly before
    /// (reverse) `index`, stopping at the board boundary.
    pub fn iterate_from(&self, index: usize, direction: Direction) -> Result<Walk<'_>, BoardError> {
        self.space_at(index)?;
        let inner = match direction {
            Direction::Forward => self.spaces[index + 1..].iter(),
            Direction::Reverse => self.spaces[..index].iter(),
        };
        Ok(Walk { inner, direction })
    }

    /// Places a new player on the start space.
    pub fn add_player(&mut self, id: PlayerId) -> Result<Player, BoardError> {
        if self.locate(id).is_some() {
            return Err(BoardError::DuplicatePlayer(id));
        }
        let start = self.start_index();
        self.spaces[start].occupants.insert(id);
        debug!(player = %id, "player entered board");
        Ok(Player::new(id, start))
    }

    /// Takes a player off the board.
    pub fn remove_player(&mut self, player: Player) -> Result<(), BoardError> {
        let index = self.check(&player)?;
        self.spaces[index].occupants.remove(&player.id());
        debug!(player = %player.id(), index, "player left board");
        Ok(())
    }

    /// Returns the space a player stands on, after checking that the
    /// player's record and the space's occupant set agree.
    pub fn position_of(&self, player: &Player) -> Result<&Space, BoardError> {
        let index = self.check(player)?;
        Ok(&self.spaces[index])
    }

    /// Moves a player to `to`, updating the old space, the new space and
    /// the player's record in one step.
    ///
    /// Everything is validated before anything is written. Moving to the
    /// space the player already occupies leaves occupancy untouched.
    pub(crate) fn relocate(&mut self, player: &mut Player, to: usize) -> Result<(), BoardError> {
        let from = self.check(player)?;
        self.space_at(to)?;
        if from == to {
            return Ok(());
        }
        self.spaces[from].occupants.remove(&player.id());
        self.spaces[to].occupants.insert(player.id());
        player.set_position(to);
        Ok(())
    }

    fn check(&self, player: &Player) -> Result<usize, BoardError> {
        let index = player.position();
        let space = self.space_at(index)?;
        if space.is_occupied_by(player.id()) {
            return Ok(index);
        }
        match self.locate(player.id()) {
            Some(_) => Err(BoardError::Desynced {
                player: player.id(),
                index,
            }),
            None => Err(BoardError::UnknownPlayer(player.id())),
        }
    }

    fn locate(&self, id: PlayerId) -> Option<usize> {
        self.spaces.iter().position(|s| s.is_occupied_by(id))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

/// A directional walk over board spaces, produced by [`Board::iterate_from`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    inner: std::slice::Iter<'a, Space>,
    direction: Direction,
}

impl<'a> Walk<'a> {
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Space;

    fn next(&mut self) -> Option<&'a Space> {
        match self.direction {
            Direction::Forward => self.inner.next(),
            Direction::Reverse => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Walk<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::{Color, CYCLE};

    #[test]
    fn standard_board_structure() {
        let board = Board::standard();
        assert_eq!(board.size(), 64);
        assert_eq!(board.special_indices(), [12, 24, 36, 48, 60]);
        assert!(board.space_at(0).unwrap().is_start());
        assert!(board.space_at(63).unwrap().is_end());
        assert_eq!(board.space_at(0).unwrap().label(), Some(START_LABEL));
        assert_eq!(board.space_at(63).unwrap().label(), Some(END_LABEL));
        assert_eq!(board.spaces().filter(|s| s.is_start()).count(), 1);
        assert_eq!(board.spaces().filter(|s| s.is_end()).count(), 1);
    }

    #[test]
    fn standard_matches_validated_build() {
        assert_eq!(Board::new(8, 8).unwrap(), Board::standard());
        assert_eq!(Board::default(), Board::standard());
    }

    #[test]
    fn standard_specials_come_from_special_indices() {
        assert_eq!(special_indices(STANDARD_ROWS, STANDARD_COLUMNS), Ok(STANDARD_SPECIALS));
        assert_eq!(Board::standard().special_indices(), STANDARD_SPECIALS);
    }

    #[test]
    fn ordinary_colors_follow_index_mod_five() {
        let board = Board::standard();
        let specials = board.special_indices();
        for space in board.spaces() {
            let i = space.index();
            if space.is_start() || space.is_end() || specials.contains(&i) {
                continue;
            }
            assert_eq!(space.space_color(), SpaceColor::Cycling(CYCLE[i % 5]), "index {}", i);
        }
        assert_eq!(board.space_at(1).unwrap().color(), Color::Red);
        assert_eq!(board.space_at(5).unwrap().color(), Color::Orange);
    }

    #[test]
    fn specials_get_markers_in_order() {
        let board = Board::standard();
        let markers: Vec<Color> = board
            .special_indices()
            .iter()
            .map(|&i| board.space_at(i).unwrap().color())
            .collect();
        assert_eq!(
            markers,
            vec![Color::Magenta, Color::Cyan, Color::Pink, Color::Gray, Color::Black]
        );
        assert_eq!(board.special_index(Landmark::BubbleGumTrapeze), 36);
        assert_eq!(board.space_at(48).unwrap().label(), Some("Marshmallow Marsh"));
    }

    #[test]
    fn rejects_small_odd_and_crowded_boards() {
        assert_eq!(Board::new(2, 4), Err(BoardError::TooSmall { spaces: 8 }));
        assert_eq!(Board::new(3, 5), Err(BoardError::OddSize { spaces: 15 }));
        // 10 / 5 = 2, fifth special would be 10
        assert_eq!(
            Board::new(2, 5),
            Err(BoardError::SpecialNotInterior { index: 10, spaces: 10 })
        );
        // 16 / 5 = 3, fifth special would be the end space
        assert_eq!(
            Board::new(4, 4),
            Err(BoardError::SpecialNotInterior { index: 15, spaces: 16 })
        );
        assert_eq!(Board::new(0, 8), Err(BoardError::TooSmall { spaces: 0 }));
    }

    #[test]
    fn accepts_other_valid_shapes() {
        let board = Board::new(3, 4).unwrap();
        assert_eq!(board.size(), 12);
        assert_eq!(board.special_indices(), [2, 4, 6, 8, 10]);
        let board = Board::new(6, 3).unwrap();
        assert_eq!(board.special_indices(), [3, 6, 9, 12, 15]);
        assert_eq!(board.end_index(), 17);
    }

    #[test]
    fn space_at_out_of_range() {
        let board = Board::standard();
        assert_eq!(
            board.space_at(64),
            Err(BoardError::IndexOutOfRange { index: 64, len: 64 })
        );
    }

    #[test]
    fn index_of_checks_identity() {
        let board = Board::standard();
        let other = Board::standard();
        let space = board.space_at(17).unwrap();
        assert_eq!(board.index_of(space), Ok(17));
        assert_eq!(
            board.index_of(other.space_at(17).unwrap()),
            Err(BoardError::ForeignSpace { index: 17 })
        );
    }

    #[test]
    fn grid_positions_are_row_major() {
        let board = Board::standard();
        assert_eq!(board.grid_position(0), Ok((0, 0)));
        assert_eq!(board.grid_position(9), Ok((1, 1)));
        assert_eq!(board.grid_position(63), Ok((7, 7)));
        assert!(board.grid_position(64).is_err());
    }

    #[test]
    fn iterate_from_is_exclusive_and_directional() {
        let board = Board::standard();
        let forward: Vec<usize> = board
            .iterate_from(60, Direction::Forward)
            .unwrap()
            .map(|s| s.index())
            .collect();
        assert_eq!(forward, vec![61, 62, 63]);

        let reverse: Vec<usize> = board
            .iterate_from(3, Direction::Reverse)
            .unwrap()
            .map(|s| s.index())
            .collect();
        assert_eq!(reverse, vec![2, 1, 0]);

        assert_eq!(board.iterate_from(63, Direction::Forward).unwrap().count(), 0);
        assert_eq!(board.iterate_from(0, Direction::Reverse).unwrap().count(), 0);
        assert_eq!(board.iterate_from(10, Direction::Forward).unwrap().len(), 53);
        assert!(board.iterate_from(64, Direction::Forward).is_err());
    }

    #[test]
    fn iterate_from_restarts_cleanly() {
        let board = Board::standard();
        let first: Vec<usize> = board.iterate_from(30, Direction::Reverse).unwrap().map(|s| s.index()).collect();
        let second: Vec<usize> = board.iterate_from(30, Direction::Reverse).unwrap().map(|s| s.index()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 30);
    }

    #[test]
    fn add_player_starts_on_start_space() {
        let mut board = Board::standard();
        let player = board.add_player(PlayerId(1)).unwrap();
        assert_eq!(player.position(), 0);
        assert!(board.space_at(0).unwrap().is_occupied_by(PlayerId(1)));
        assert_eq!(board.position_of(&player).unwrap().index(), 0);
        assert_eq!(
            board.add_player(PlayerId(1)),
            Err(BoardError::DuplicatePlayer(PlayerId(1)))
        );
    }

    #[test]
    fn relocate_moves_both_sides() {
        let mut board = Board::standard();
        let mut player = board.add_player(PlayerId(2)).unwrap();
        board.relocate(&mut player, 20).unwrap();
        assert_eq!(player.position(), 20);
        assert!(!board.space_at(0).unwrap().is_occupied_by(PlayerId(2)));
        assert!(board.space_at(20).unwrap().is_occupied_by(PlayerId(2)));
    }

    #[test]
    fn relocate_out_of_range_changes_nothing() {
        let mut board = Board::standard();
        let mut player = board.add_player(PlayerId(2)).unwrap();
        let before = board.clone();
        assert!(board.relocate(&mut player, 99).is_err());
        assert_eq!(board, before);
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn stale_handle_is_reported() {
        let mut board = Board::standard();
        let mut player = board.add_player(PlayerId(5)).unwrap();
        let stale = Player::new(PlayerId(5), 0);
        board.relocate(&mut player, 7).unwrap();
        assert_eq!(
            board.position_of(&stale),
            Err(BoardError::Desynced { player: PlayerId(5), index: 0 })
        );
        let stranger = Player::new(PlayerId(9), 0);
        assert_eq!(board.position_of(&stranger), Err(BoardError::UnknownPlayer(PlayerId(9))));
    }

    #[test]
    fn remove_player_clears_occupancy() {
        let mut board = Board::standard();
        let player = board.add_player(PlayerId(3)).unwrap();
        board.remove_player(player).unwrap();
        assert_eq!(board.space_at(0).unwrap().occupant_count(), 0);
        assert!(board.add_player(PlayerId(3)).is_ok());
    }

    #[test]
    fn direction_from_reverse_flag() {
        assert_eq!(Direction::from_reverse(false), Direction::Forward);
        assert_eq!(Direction::from_reverse(true), Direction::Reverse);
        assert!(Direction::Reverse.is_reverse());
    }
}
