//! Win detection logic for tic-tac-toe.

use crate::types::{Board, COLS, Player, ROWS};
use tracing::instrument;

/// Checks whether `player` holds a full row, column or diagonal.
///
/// Each line family is scanned on its own and every scan stops at the first
/// cell the player does not hold.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let held = |row: usize, col: usize| board.get(row, col).is_held_by(player);

    // Rows
    if (0..ROWS).any(|row| (0..COLS).all(|col| held(row, col))) {
        return true;
    }

    // Columns
    if (0..COLS).any(|col| (0..ROWS).all(|row| held(row, col))) {
        return true;
    }

    // Main diagonal
    if (0..ROWS).all(|i| held(i, i)) {
        return true;
    }

    // Anti-diagonal
    (0..ROWS).all(|i| held(i, ROWS - i - 1))
}

/// Returns the player holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    <Player as strum::IntoEnumIterator>::iter().find(|player| has_won(board, *player))
}
