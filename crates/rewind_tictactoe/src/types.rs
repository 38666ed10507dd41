//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::action::MoveError;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// Errors raised when choosing a board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardSizeError {
    /// A board needs at least one square.
    #[display("Board side must be at least 1")]
    Zero,

    /// The side is too long to play or render.
    #[display("Board side {} exceeds the maximum of {}", _0, BoardSize::MAX)]
    TooLarge(usize),
}

impl std::error::Error for BoardSizeError {}

/// Side length of a square board.
///
/// The classic game is 3x3. Any side in `1..=BoardSize::MAX` is accepted;
/// win detection generalizes to full rows, columns and both diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize {
    side: usize,
}

impl BoardSize {
    /// The classic 3x3 board.
    pub const CLASSIC: BoardSize = BoardSize { side: 3 };

    /// Largest accepted side length.
    pub const MAX: usize = 16;

    /// Validates a side length.
    #[instrument]
    pub fn new(side: usize) -> Result<Self, BoardSizeError> {
        match side {
            0 => Err(BoardSizeError::Zero),
            s if s > Self::MAX => Err(BoardSizeError::TooLarge(s)),
            s => Ok(Self { side: s }),
        }
    }

    /// Returns the side length.
    pub fn side(self) -> usize {
        self.side
    }

    /// Returns the number of squares on the board.
    pub fn cells(self) -> usize {
        self.side * self.side
    }

    /// Maps an in-range linear index to its coordinate.
    pub(crate) fn position_of(self, index: usize) -> Position {
        Position::new(index / self.side, index % self.side)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.side, self.side)
    }
}

/// A (row, column) coordinate, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position from a row-major index, if it lies on the board.
    pub fn from_index(index: usize, size: BoardSize) -> Option<Self> {
        (index < size.cells()).then(|| size.position_of(index))
    }

    /// Converts to a row-major index, if the position lies on the board.
    pub fn to_index(self, size: BoardSize) -> Option<usize> {
        let side = size.side();
        (self.row < side && self.col < side).then_some(self.row * side + self.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Humans count from one.
        write!(f, "row {}, col {}", self.row + 1, self.col + 1)
    }
}

/// How a caller names a square: flat index or grid coordinate.
///
/// Both styles resolve to the same row-major index once the board size is
/// known, so flat and grid front-ends drive the same store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Address {
    /// Row-major index (0 is top-left).
    Index(usize),
    /// Grid coordinate.
    Coord(Position),
}

impl Address {
    /// Resolves to a row-major index on a board of the given size.
    pub fn resolve(self, size: BoardSize) -> Option<usize> {
        match self {
            Address::Index(index) => (index < size.cells()).then_some(index),
            Address::Coord(position) => position.to_index(size),
        }
    }
}

impl From<usize> for Address {
    fn from(index: usize) -> Self {
        Address::Index(index)
    }
}

impl From<Position> for Address {
    fn from(position: Position) -> Self {
        Address::Coord(position)
    }
}

impl From<(usize, usize)> for Address {
    fn from((row, col): (usize, usize)) -> Self {
        Address::Coord(Position::new(row, col))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Address::Index(index) => write!(f, "index {}", index),
            Address::Coord(position) => write!(f, "{}", position),
        }
    }
}

/// Square board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Creates an empty 3x3 board.
    pub fn classic() -> Self {
        Self::new(BoardSize::CLASSIC)
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square at a row-major index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at an address of either style.
    pub fn at(&self, address: impl Into<Address>) -> Option<Square> {
        address
            .into()
            .resolve(self.size)
            .and_then(|index| self.get(index))
    }

    /// Sets the square at an address.
    pub fn set(&mut self, address: impl Into<Address>, square: Square) -> Result<(), MoveError> {
        let address = address.into();
        let index = address
            .resolve(self.size)
            .ok_or(MoveError::OutOfBounds(address))?;
        self.squares[index] = square;
        Ok(())
    }

    /// Checks if the square at a row-major index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.side())
    }

    /// Counts occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Returns a copy of this board with `mark` placed at an in-range index.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = self.clone();
        if let Some(square) = next.squares.get_mut(index) {
            *square = Square::Occupied(mark);
        }
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}
