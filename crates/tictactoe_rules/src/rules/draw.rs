//! Tie detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, COLS, ROWS};
use tracing::instrument;

/// Checks if every cell on the board is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.filled() >= ROWS * COLS
}

/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
