//! Core domain types for tic-tac-toe.

use derive_more::Display;
use tracing::instrument;

/// Number of rows on the board.
pub const ROWS: usize = 3;

/// Number of columns on the board.
pub const COLS: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Player {
    /// Player 1, marks `X` and always moves first.
    #[display("1")]
    One,
    /// Player 2, marks `O`.
    #[display("2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the 1-based player number shown on screen.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Returns the board mark for this player.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if the cell belongs to `player`.
    pub fn is_held_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

/// A validated 0-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({}, {})", row + 1, col + 1)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates a coordinate from 0-based indices, or `None` if off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    /// Creates a coordinate from the 1-based values a player types.
    ///
    /// Zero and negative values are off the board just like values past the
    /// last row or column.
    #[instrument]
    pub fn from_one_based(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row.checked_sub(1)?).ok()?;
        let col = usize::try_from(col.checked_sub(1)?).ok()?;
        Self::new(row, col)
    }

    /// Returns the 0-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the 0-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Coordinate { row, col }))
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells indexed `[row][col]`, 0-based.
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given 0-based position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Gets the cell at a validated coordinate.
    pub fn at(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Sets the cell at a validated coordinate.
    ///
    /// No occupancy check happens here; the caller decides whether the
    /// overwrite is legal.
    #[instrument(skip(self))]
    pub fn set(&mut self, coord: Coordinate, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.at(coord) == Cell::Empty
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Returns the number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_every_cell() {
        for player in [Player::One, Player::Two] {
            for coord in Coordinate::all() {
                let mut board = Board::new();
                board.set(coord, Cell::Occupied(player));
                assert_eq!(board.get(coord.row(), coord.col()), Cell::Occupied(player));
                assert_eq!(board.filled(), 1);
            }
        }
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        for coord in Coordinate::all() {
            board.set(coord, Cell::Occupied(Player::Two));
        }
        assert_eq!(board.filled(), 9);

        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(2, 2).is_some());
        assert!(Coordinate::new(3, 0).is_none());
        assert!(Coordinate::new(0, 3).is_none());
    }

    #[test]
    fn test_coordinate_from_one_based() {
        let coord = Coordinate::from_one_based(1, 3).expect("on the board");
        assert_eq!((coord.row(), coord.col()), (0, 2));
        assert_eq!(Coordinate::from_one_based(0, 1), None);
        assert_eq!(Coordinate::from_one_based(4, 1), None);
        assert_eq!(Coordinate::from_one_based(2, -1), None);
        assert_eq!(Coordinate::from_one_based(i64::MIN, 1), None);
    }

    #[test]
    fn test_coordinate_display_is_one_based() {
        let coord = Coordinate::new(0, 2).expect("on the board");
        assert_eq!(coord.to_string(), "(1, 3)");
    }

    #[test]
    fn test_player_alternation() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.to_string(), "1");
        assert_eq!(Player::Two.mark(), 'O');
    }
}
