//! Application state and key handling.
//!
//! [`App`] is the adapter between the terminal and [`GameHistory`]: it keeps
//! only what the screen needs (cursor, focus, selection, last message) and
//! turns key presses into `apply_move` and `jump_to` calls.

use crate::input::move_cursor;
use crossterm::event::KeyCode;
use rewind_tictactoe::{BoardSize, GameHistory, Position};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board: arrows move the cursor, Enter places a mark.
    #[default]
    Board,
    /// The jump list: arrows select an entry, Enter jumps to it.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
}

impl App {
    /// Creates an application with a fresh game of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let middle = size.side() / 2;
        Self {
            game: GameHistory::new(size),
            cursor: Position::new(middle, middle),
            focus: Focus::default(),
            selected: 0,
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the highlighted jump-list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the message from the last rejected action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus, current = self.game.current_index()))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Flow::Quit;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_index();
            }
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('u') => self.step_back(),
            KeyCode::Char('r') => self.step_forward(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        Flow::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at_cursor(),
            _ => self.cursor = move_cursor(self.cursor, key, self.game.size()),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.len() - 1;
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            _ => {}
        }
    }

    fn place_at_cursor(&mut self) {
        match self.game.apply_move(self.cursor) {
            Ok(mark) => {
                debug!(%mark, cursor = %self.cursor, "Mark placed");
                self.message = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
        self.selected = self.game.current_index();
    }

    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
        self.selected = self.game.current_index();
    }

    fn step_back(&mut self) {
        if let Some(index) = self.game.current_index().checked_sub(1) {
            self.jump(index);
        }
    }

    fn step_forward(&mut self) {
        let index = self.game.current_index() + 1;
        if index < self.game.len() {
            self.jump(index);
        }
    }

    /// Restarts the game on a board of the same size.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.selected = 0;
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Mark;

    #[test]
    fn test_starts_centered_on_board() {
        let app = App::new(BoardSize::CLASSIC);
        assert_eq!(app.cursor(), Position::new(1, 1));
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_rejected_move_sets_message() {
        let mut app = App::new(BoardSize::CLASSIC);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().len(), 2);
        assert_eq!(
            app.message(),
            Some("Square at row 2, col 2 is already occupied")
        );
    }

    #[test]
    fn test_tab_selects_current_entry() {
        let mut app = App::new(BoardSize::CLASSIC);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_step_keys_stay_in_range() {
        let mut app = App::new(BoardSize::CLASSIC);
        app.handle_key(KeyCode::Char('u'));
        assert_eq!(app.game().current_index(), 0);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().current_index(), 1);
        app.handle_key(KeyCode::Char('u'));
        assert_eq!(app.game().current_index(), 0);
        assert_eq!(app.game().to_move(), Mark::X);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(BoardSize::CLASSIC);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Left), Flow::Continue);
    }
}
