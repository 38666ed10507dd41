//! Rewind tic-tac-toe - game logic with move history and time-travel
//!
//! The crate owns the rules and the history log; front-ends only read
//! the current snapshot and forward clicks or key presses.
//!
//! # Architecture
//!
//! - **Types**: marks, squares, N x N boards, and both addressing styles
//!   (row-major index or `(row, col)`).
//! - **Rules**: pure win detection over rows, columns and diagonals.
//! - **History**: the snapshot log, the current pointer, branch-discard on
//!   new moves, and time-travel.
//! - **View**: status text, jump-list labels and a plain-text board.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, Mark};
//!
//! let mut game = GameHistory::classic();
//! game.apply_move(4).unwrap();          // X takes the center
//! game.apply_move((0, 0)).unwrap();     // O takes the top-left corner
//! game.jump_to(1).unwrap();             // back to the position after X's move
//! assert_eq!(game.to_move(), Mark::O);
//! assert_eq!(game.len(), 3);            // jumping never rewrites the log
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod rules;
mod types;
pub mod view;

pub use action::{Move, MoveError};
pub use history::{GameHistory, JumpError, Snapshot, Status};
pub use rules::{check_winner, winning_line, winning_lines};
pub use types::{Address, Board, BoardSize, BoardSizeError, Mark, Position, Square};
pub use view::{JumpEntry, jump_list, render_board, status_line};
