//! Game record: board, player to move and move count.

use crate::rules::{MAX_MOVES, MIN_MOVES_FOR_WIN, has_won};
use crate::types::{Board, Cell, Coordinate, Player};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("Player {_0} wins")]
    Won(Player),
    /// The board filled up without a line.
    #[display("Tie")]
    Tied,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell at the coordinate is already occupied.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Coordinate),

    /// The game already has an outcome.
    #[display("Game is already over")]
    GameOver,
}

/// One game of tic-tac-toe.
///
/// Placing a mark and ending the turn are separate steps so the caller can
/// check for an outcome between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    move_count: usize,
}

impl Game {
    /// Creates a new game with an empty board and player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            move_count: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the number of marks placed this game.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Places the current player's mark.
    ///
    /// The board is untouched when an error is returned.
    #[instrument(skip(self), fields(player = %self.to_move, move_count = self.move_count))]
    pub fn place(&mut self, coord: Coordinate) -> Result<(), MoveError> {
        if self.move_count >= MAX_MOVES {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(coord) {
            return Err(MoveError::Occupied(coord));
        }

        self.board.set(coord, Cell::Occupied(self.to_move));
        self.move_count += 1;
        debug!(%coord, move_count = self.move_count, "Mark placed");
        Ok(())
    }

    /// Evaluates the game after the current player's move.
    ///
    /// Lines are only scanned once enough marks exist for one to be complete.
    #[instrument(skip(self), fields(player = %self.to_move, move_count = self.move_count))]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.move_count >= MIN_MOVES_FOR_WIN && has_won(&self.board, self.to_move) {
            return Some(Outcome::Won(self.to_move));
        }

        if self.move_count >= MAX_MOVES {
            return Some(Outcome::Tied);
        }

        None
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self))]
    pub fn pass_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Clears the board and starts over with player one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::One;
        self.move_count = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
