//! Terminal front-end for rewind tic-tac-toe
//!
//! Renders the current board, the status line and the jump list, and
//! forwards key presses into [`rewind_tictactoe::GameHistory`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod ui;

pub use app::{App, Flow, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
