//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules hold no state, so
//! the winner is always derived fresh from whichever snapshot is on screen.

pub mod win;

pub use win::{check_winner, winning_line, winning_lines};
