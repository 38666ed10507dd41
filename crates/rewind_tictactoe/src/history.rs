//! Game history with time-travel.
//!
//! [`GameHistory`] owns an ordered log of board snapshots and a pointer to
//! the one currently on screen. Two operations move it forward:
//!
//! - [`GameHistory::apply_move`] keeps the snapshots up to the pointer,
//!   drops everything after it, and appends the new board.
//! - [`GameHistory::jump_to`] only moves the pointer.
//!
//! Whose turn it is and who has won are never stored. Both are derived
//! from the pointer and the current board on every read.

use super::action::{Move, MoveError};
use super::rules::check_winner;
use super::types::{Address, Board, BoardSize, BoardSizeError, Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One recorded board state and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// The move that produced this board. `None` for the opening snapshot.
    #[getter(skip)]
    last_move: Option<Move>,
}

impl Snapshot {
    fn opening(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            last_move: None,
        }
    }

    /// Returns the move that produced this snapshot.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the square at an address of either style.
    pub fn square(&self, address: impl Into<Address>) -> Option<Square> {
        self.board.at(address)
    }
}

/// Derived status of the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    /// Winner on the current board, if any.
    pub winner: Option<Mark>,
    /// Whether X places the next mark.
    pub x_is_next: bool,
}

impl Status {
    /// Returns the mark that moves next.
    pub fn to_move(self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    /// Returns true once someone has completed a line.
    pub fn is_decided(self) -> bool {
        self.winner.is_some()
    }
}

/// Errors raised when jumping through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// No snapshot exists at the requested index.
    #[display("History index {} is out of range (0..{})", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Linear history of a single game.
///
/// Invariants:
/// - there is always at least one snapshot, the empty opening board;
/// - `current < snapshots.len()`;
/// - snapshot `i` has exactly `i` marks, X on even moves and O on odd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    current: usize,
}

impl GameHistory {
    /// Starts a game on an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        debug!("Starting new game");
        Self {
            snapshots: vec![Snapshot::opening(size)],
            current: 0,
        }
    }

    /// Starts a classic 3x3 game.
    pub fn classic() -> Self {
        Self::new(BoardSize::CLASSIC)
    }

    /// Starts a game with a side length chosen at runtime.
    #[instrument]
    pub fn try_new(side: usize) -> Result<Self, BoardSizeError> {
        BoardSize::new(side).map(Self::new)
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.current_snapshot().board().size()
    }

    /// Returns every recorded snapshot, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the index of the snapshot on screen.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the snapshot on screen.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.current]
    }

    /// Returns true when X moves next (even positions).
    pub fn x_is_next(&self) -> bool {
        self.current % 2 == 0
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    /// Returns the winner and turn for the current position.
    pub fn status(&self) -> Status {
        Status {
            winner: check_winner(self.current_snapshot().board()),
            x_is_next: self.x_is_next(),
        }
    }

    /// Places the next mark at `at`.
    ///
    /// Accepts a row-major index or a `(row, col)` pair. Snapshots after
    /// the current one are discarded before the new board is appended.
    /// Returns the mark that was placed.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the address is not on the board.
    /// - [`MoveError::GameDecided`] if the current board already has a winner.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    ///
    /// The game is unchanged on error.
    pub fn apply_move(&mut self, at: impl Into<Address>) -> Result<Mark, MoveError> {
        self.place(at.into())
    }

    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    fn place(&mut self, address: Address) -> Result<Mark, MoveError> {
        let board = self.current_snapshot().board();
        let size = board.size();

        let Some(index) = address.resolve(size) else {
            warn!(%address, "Rejected move off the board");
            return Err(MoveError::OutOfBounds(address));
        };

        if let Some(winner) = check_winner(board) {
            warn!(%winner, "Rejected move after game was won");
            return Err(MoveError::GameDecided(winner));
        }

        let position = size.position_of(index);
        if !board.is_empty(index) {
            warn!(%position, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(position));
        }

        let mark = self.to_move();
        let next = Snapshot {
            board: board.with_mark(index, mark),
            last_move: Some(Move::new(mark, position)),
        };

        let discarded = self.snapshots.len() - self.current - 1;
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current += 1;

        debug!(%mark, %position, discarded, len = self.snapshots.len(), "Move applied");
        Ok(mark)
    }

    /// Moves the pointer to snapshot `index`.
    ///
    /// The log itself is untouched. Jumping to the current index is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if no snapshot exists at `index`.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        let len = self.snapshots.len();
        if index >= len {
            warn!("Rejected jump outside history");
            return Err(JumpError::OutOfRange { index, len });
        }

        if index != self.current {
            self.current = index;
            debug!(x_is_next = self.x_is_next(), "Jumped through history");
        }
        Ok(())
    }

    /// Discards the whole game and starts over on an empty board.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn reset(&mut self) {
        *self = Self::new(self.size());
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::classic()
    }
}
