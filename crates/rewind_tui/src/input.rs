//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::{BoardSize, Position};

/// Moves the board cursor with arrow keys or hjkl, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode, size: BoardSize) -> Position {
    let last = size.side() - 1;

    match key {
        KeyCode::Right | KeyCode::Char('l') => Position::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Left | KeyCode::Char('h') => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => Position::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Up | KeyCode::Char('k') => Position::new(cursor.row.saturating_sub(1), cursor.col),
        // No change for other keys
        _ => cursor,
    }
}
