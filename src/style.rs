//! ANSI color tokens for board marks and status lines.

use derive_new::new;
use tictactoe_rules::{Cell, Player};

/// Escape sequence that returns the terminal to plain text.
pub const RESET: &str = "\x1b[0m";

/// Named foreground colors used by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    /// Error lines.
    Red,
    /// Winner announcement.
    Green,
    /// Player one's mark, turn banner and tie announcement.
    Blue,
    /// Player two's mark.
    Purple,
}

impl Color {
    /// Returns the ANSI escape sequence that selects this color.
    pub fn escape(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Purple => "\x1b[35m",
        }
    }

    /// Returns the color a player's mark is drawn in.
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::One => Color::Blue,
            Player::Two => Color::Purple,
        }
    }
}

/// Wraps text in color tokens, or passes it through when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Returns whether escape sequences are emitted.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `text` in the color token followed by the reset token.
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("{}{}{}", color.escape(), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Renders a single board cell.
    ///
    /// Empty cells are drawn as a plain `-`.
    pub fn cell(&self, cell: Cell) -> String {
        match cell {
            Cell::Empty => "-".to_string(),
            Cell::Occupied(player) => {
                self.paint(&player.mark().to_string(), Color::for_player(player))
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_with_reset() {
        let palette = Palette::default();
        assert_eq!(palette.paint("TIE!", Color::Blue), "\x1b[34mTIE!\x1b[0m");
    }

    #[test]
    fn test_plain_palette_passes_text_through() {
        let palette = Palette::plain();
        assert_eq!(palette.paint("TIE!", Color::Blue), "TIE!");
    }

    #[test]
    fn test_cells() {
        let palette = Palette::default();
        assert_eq!(palette.cell(Cell::Empty), "-");
        assert_eq!(palette.cell(Cell::Occupied(Player::One)), "\x1b[34mX\x1b[0m");
        assert_eq!(palette.cell(Cell::Occupied(Player::Two)), "\x1b[35mO\x1b[0m");
    }

    #[test]
    fn test_every_color_is_an_sgr_sequence() {
        for color in <Color as strum::IntoEnumIterator>::iter() {
            let escape = color.escape();
            assert!(escape.starts_with("\x1b["), "{color}");
            assert!(escape.ends_with('m'), "{color}");
        }
    }
}
