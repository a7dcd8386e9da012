//! Text rendering of the board.

use crate::style::Palette;
use tictactoe_rules::{Board, COLS};
use tracing::instrument;

/// Renders the board with `+---` borders and colored marks.
///
/// Cell lines keep the trailing space after the last `|`.
#[instrument(skip_all)]
pub fn render_board(board: &Board, palette: &Palette) -> String {
    let border = format!("{}+\n", "+---".repeat(COLS));
    let mut result = String::new();

    for row in board.rows() {
        result.push_str(&border);
        result.push_str("| ");
        for cell in row {
            result.push_str(&palette.cell(*cell));
            result.push_str(" | ");
        }
        result.push('\n');
    }

    result.push_str(&border);
    result
}
