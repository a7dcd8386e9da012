//! Prompting and reading player input.

use crate::error::{SessionError, TurnError};
use std::io::{BufRead, Write};
use tictactoe_rules::{COLS, Coordinate, ROWS};
use tracing::{debug, instrument};

/// What the players chose after a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    /// Start a fresh game.
    Replay,
    /// Leave the program.
    Quit,
}

/// Line-based terminal input and output.
///
/// Fatal I/O problems come back as the outer [`SessionError`]; rejected
/// answers come back as the inner [`TurnError`] so the caller can prompt
/// again.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Asks for a row and a column and checks that they are on the board.
    ///
    /// Both values are read before either is checked. Text that is not a
    /// whole number counts as out of range. Occupancy is left to
    /// [`Game::place`](tictactoe_rules::Game::place).
    #[instrument(skip_all)]
    pub fn read_coordinate(&mut self) -> Result<Result<Coordinate, TurnError>, SessionError> {
        let row = self.ask(&format!("Enter row (1-{}): ", ROWS))?;
        let col = self.ask(&format!("Enter column (1-{}): ", COLS))?;
        writeln!(self.output)?;

        let coord = match (parse_number(&row), parse_number(&col)) {
            (Some(row), Some(col)) => Coordinate::from_one_based(row, col),
            _ => None,
        };

        Ok(coord.ok_or_else(|| {
            debug!(row = %row.trim(), col = %col.trim(), "Coordinate rejected");
            TurnError::InvalidCoordinate
        }))
    }

    /// Reads an answer to the replay prompt.
    ///
    /// `yes` is accepted in any letter case, `no` only in lower case.
    #[instrument(skip_all)]
    pub fn read_replay_answer(&mut self) -> Result<Result<ReplayChoice, TurnError>, SessionError> {
        let line = self.read_line()?;
        let answer = line.split_whitespace().next().unwrap_or_default();

        let choice = if answer.eq_ignore_ascii_case("yes") {
            Ok(ReplayChoice::Replay)
        } else if answer == "no" {
            Ok(ReplayChoice::Quit)
        } else {
            debug!(answer, "Replay answer rejected");
            Err(TurnError::InvalidReplayAnswer)
        };

        Ok(choice)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::input_closed());
        }
        Ok(line)
    }
}

fn parse_number(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, output) = prompter.into_parts();
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn test_valid_coordinate_is_zero_based() {
        let mut prompter = scripted("1\n3\n");
        let coord = prompter
            .read_coordinate()
            .expect("input available")
            .expect("valid coordinate");
        assert_eq!((coord.row(), coord.col()), (0, 2));
        assert_eq!(
            transcript(prompter),
            "Enter row (1-3): Enter column (1-3): \n"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let mut prompter = scripted("  2 \r\n\t2\n");
        let coord = prompter
            .read_coordinate()
            .expect("input available")
            .expect("valid coordinate");
        assert_eq!((coord.row(), coord.col()), (1, 1));
    }

    #[test]
    fn test_out_of_range() {
        for input in ["0\n1\n", "4\n1\n", "1\n0\n", "1\n4\n", "-1\n2\n"] {
            let mut prompter = scripted(input);
            let result = prompter.read_coordinate().expect("input available");
            assert_eq!(result, Err(TurnError::InvalidCoordinate), "{input:?}");
        }
    }

    #[test]
    fn test_unparseable_is_invalid_coordinate() {
        for input in ["a\n1\n", "1\nb\n", "\n\n", "1.5\n2\n", "2 3\n1\n"] {
            let mut prompter = scripted(input);
            let result = prompter.read_coordinate().expect("input available");
            assert_eq!(result, Err(TurnError::InvalidCoordinate), "{input:?}");
        }
    }

    #[test]
    fn test_invalid_row_still_reads_column() {
        let mut prompter = scripted("9\n1\n2\n2\n");
        assert_eq!(
            prompter.read_coordinate().expect("input available"),
            Err(TurnError::InvalidCoordinate)
        );
        let coord = prompter
            .read_coordinate()
            .expect("input available")
            .expect("valid coordinate");
        assert_eq!((coord.row(), coord.col()), (1, 1));
    }

    #[test]
    fn test_closed_input_is_fatal() {
        let mut prompter = scripted("1\n");
        assert!(prompter.read_coordinate().is_err());
    }

    #[test]
    fn test_replay_yes_any_case() {
        for input in ["yes\n", "YES\n", "Yes\n", "yEs\n", "  yes  \n"] {
            let mut prompter = scripted(input);
            let choice = prompter.read_replay_answer().expect("input available");
            assert_eq!(choice, Ok(ReplayChoice::Replay), "{input:?}");
        }
    }

    #[test]
    fn test_replay_no_is_case_sensitive() {
        let mut prompter = scripted("no\n");
        assert_eq!(
            prompter.read_replay_answer().expect("input available"),
            Ok(ReplayChoice::Quit)
        );

        for input in ["NO\n", "No\n", "n\n", "\n", "maybe\n", "y\n"] {
            let mut prompter = scripted(input);
            let choice = prompter.read_replay_answer().expect("input available");
            assert_eq!(choice, Err(TurnError::InvalidReplayAnswer), "{input:?}");
        }
    }

    #[test]
    fn test_replay_takes_first_word() {
        let mut prompter = scripted("yes please\n");
        assert_eq!(
            prompter.read_replay_answer().expect("input available"),
            Ok(ReplayChoice::Replay)
        );
    }
}
