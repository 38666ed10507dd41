//! Presentation model: the text a front-end shows for a game.
//!
//! Front-ends render these values however they like. Keeping the wording
//! here means every front-end reports status and history the same way.

use super::history::{GameHistory, Status};
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Returns the status line for the current position.
///
/// A decided game names its winner. Otherwise the line names the next
/// mover, even on a full board.
pub fn status_line(status: &Status) -> String {
    match status.winner {
        Some(winner) => format!("The winner is {}", winner),
        None => format!("Next goes to {}", status.to_move()),
    }
}

/// One entry of the jump list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpEntry {
    /// Snapshot index to pass to [`GameHistory::jump_to`].
    pub index: usize,
    /// Human-readable label.
    pub label: String,
    /// Whether this entry is the snapshot on screen.
    pub is_current: bool,
}

/// Builds the jump list: one entry per recorded snapshot.
#[instrument(skip(game), fields(len = game.len(), current = game.current_index()))]
pub fn jump_list(game: &GameHistory) -> Vec<JumpEntry> {
    game.snapshots()
        .iter()
        .enumerate()
        .map(|(index, snapshot)| {
            let label = match snapshot.last_move() {
                Some(mov) if index > 0 => format!("Go to move #{} ({})", index, mov),
                _ => "Go to the beginning".to_string(),
            };
            JumpEntry {
                index,
                label,
                is_current: index == game.current_index(),
            }
        })
        .collect()
}

/// Returns the symbol for a square.
pub fn square_symbol(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Mark::X) => 'X',
        Square::Occupied(Mark::O) => 'O',
    }
}

/// Formats a board as plain text, one line per row.
pub fn render_board(board: &Board) -> String {
    board
        .rows()
        .map(|row| row.iter().copied().map(square_symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
