//! Win detection logic.

use super::super::{Board, BoardSize, Mark, Square};
use tracing::instrument;

/// Enumerates every winning line on a board of the given size.
///
/// Rows first, then columns, then the two diagonals. Each line lists
/// row-major indices. A 3x3 board has the classic eight lines.
pub fn winning_lines(size: BoardSize) -> Vec<Vec<usize>> {
    let n = size.side();
    let mut lines: Vec<Vec<usize>> = Vec::with_capacity(2 * n + 2);

    // Rows
    for row in 0..n {
        lines.push((0..n).map(|col| row * n + col).collect());
    }
    // Columns
    for col in 0..n {
        lines.push((0..n).map(|row| row * n + col).collect());
    }
    // Diagonals
    lines.push((0..n).map(|i| i * n + i).collect());
    lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

    lines
}

/// Returns the first completed line and the mark that completed it.
#[instrument(level = "trace", skip(board), fields(size = %board.size()))]
pub fn winning_line(board: &Board) -> Option<(Mark, Vec<usize>)> {
    winning_lines(board.size()).into_iter().find_map(|line| {
        let Some(Square::Occupied(mark)) = line.first().and_then(|&i| board.get(i)) else {
            return None;
        };
        line.iter()
            .all(|&i| board.get(i) == Some(Square::Occupied(mark)))
            .then_some((mark, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark fills a whole row, column or
/// diagonal, `None` otherwise. A full board with no line is `None`.
#[instrument(level = "trace", skip(board), fields(size = %board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
