//! Pure tic-tac-toe game logic.
//!
//! A fixed 3x3 [`Board`], the two [`Player`]s, win and tie [`rules`], and the
//! [`Game`] record that tracks whose turn it is and how many marks are down.
//! Nothing here touches a terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod rules;
mod types;

pub use game::{Game, MoveError, Outcome};
pub use types::{Board, COLS, Cell, Coordinate, Player, ROWS};
