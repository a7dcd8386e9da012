//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the game record and the tests can use them directly.

pub mod draw;
pub mod win;

use crate::types::{COLS, ROWS};

/// Fewest filled cells on which any line can be complete.
pub const MIN_MOVES_FOR_WIN: usize = ROWS + COLS - 1;

/// Filled cells on a full board.
pub const MAX_MOVES: usize = ROWS * COLS;

pub use draw::{is_full, is_tie};
pub use win::{has_won, winner};
