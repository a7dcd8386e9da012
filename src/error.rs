//! Error types for the interactive session.

use derive_more::{Display, Error};
use tictactoe_rules::MoveError;
use tracing::instrument;

/// A rejected turn or replay answer.
///
/// All of these are recovered by prompting again. The display text is the
/// message shown to the players after the `[ERROR]: ` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnError {
    /// Row or column was not a number in range.
    #[display("Input value is invalid!")]
    InvalidCoordinate,

    /// The chosen cell already holds a mark.
    #[display("Board slot is already taken!")]
    OccupiedCell,

    /// Replay answer was neither `yes` nor `no`.
    #[display("Given an invalid input (yes or no)")]
    InvalidReplayAnswer,
}

impl From<MoveError> for TurnError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::Occupied(_) => TurnError::OccupiedCell,
            // Moves are never attempted once the game has an outcome.
            MoveError::GameOver => TurnError::InvalidCoordinate,
        }
    }
}

/// Fatal session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Error for a terminal that stopped sending input.
    #[track_caller]
    pub fn input_closed() -> Self {
        Self::new("Input stream closed")
    }
}

impl From<std::io::Error> for SessionError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Terminal I/O error: {}", err))
    }
}
