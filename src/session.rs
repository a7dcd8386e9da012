//! The interactive game loop.
//!
//! A [`Session`] is a small state machine over [`Phase`]. Each call to
//! [`Session::step`] performs exactly one transition; [`Session::run`] steps
//! until the players decline another game.

use crate::error::{SessionError, TurnError};
use crate::input::{Prompter, ReplayChoice};
use crate::render::render_board;
use crate::style::{Color, Palette};
use crate::terminal::TerminalController;
use derive_new::new;
use std::io::{BufRead, Write};
use tictactoe_rules::{Game, Outcome, Player};
use tracing::{debug, info, instrument};

/// Where the game loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the current player's row and column.
    AwaitingInput,
    /// A mark was just placed and has not been evaluated yet.
    TurnComplete,
    /// The player who just moved completed a line.
    Won(Player),
    /// The board filled up without a line.
    Tied,
    /// Waiting for a yes/no answer to the replay prompt.
    AwaitingReplayChoice,
    /// The players declined another game.
    Terminated,
}

/// One run of the program: any number of games until the players quit.
#[derive(Debug, new)]
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    terminal: Box<dyn TerminalController>,
    palette: Palette,
    #[new(default)]
    game: Game,
    #[new(value = "Phase::AwaitingInput")]
    phase: Phase,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Consumes the session and returns its streams.
    pub fn into_parts(self) -> (R, W) {
        self.prompter.into_parts()
    }

    /// Plays games until the players answer `no` to the replay prompt.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started");
        self.clear()?;

        while self.phase != Phase::Terminated {
            self.step()?;
        }

        self.prompter.output().flush()?;
        info!("Players declined another game");
        Ok(())
    }

    /// Performs a single transition.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn step(&mut self) -> Result<(), SessionError> {
        let next = match self.phase {
            Phase::AwaitingInput => self.take_turn()?,
            Phase::TurnComplete => self.evaluate_turn()?,
            Phase::Won(player) => {
                self.show_result(&format!("WINNER: Player {}", player), Color::Green)?
            }
            Phase::Tied => self.show_result("TIE!", Color::Blue)?,
            Phase::AwaitingReplayChoice => self.ask_replay()?,
            Phase::Terminated => Phase::Terminated,
        };

        if next != self.phase {
            debug!(from = ?self.phase, to = ?next, "Phase transition");
        }
        self.phase = next;
        Ok(())
    }

    fn take_turn(&mut self) -> Result<Phase, SessionError> {
        let board = render_board(self.game.board(), &self.palette);
        let banner = self
            .palette
            .paint(&format!("Player {}'s turn", self.game.to_move()), Color::Blue);
        let out = self.prompter.output();
        write!(out, "{}", board)?;
        writeln!(out, "{}", banner)?;

        let placed = match self.prompter.read_coordinate()? {
            Ok(coord) => self.game.place(coord).map_err(TurnError::from),
            Err(e) => Err(e),
        };

        match placed {
            Ok(()) => Ok(Phase::TurnComplete),
            Err(e) => {
                debug!(error = %e, player = %self.game.to_move(), "Turn rejected");
                self.clear()?;
                self.show_error(e)?;
                Ok(Phase::AwaitingInput)
            }
        }
    }

    fn evaluate_turn(&mut self) -> Result<Phase, SessionError> {
        match self.game.outcome() {
            Some(Outcome::Won(player)) => Ok(Phase::Won(player)),
            Some(Outcome::Tied) => Ok(Phase::Tied),
            None => {
                self.game.pass_turn();
                self.clear()?;
                Ok(Phase::AwaitingInput)
            }
        }
    }

    fn show_result(&mut self, message: &str, color: Color) -> Result<Phase, SessionError> {
        info!(result = message, moves = self.game.move_count(), "Game finished");
        self.clear()?;

        let board = render_board(self.game.board(), &self.palette);
        let message = self.palette.paint(message, color);
        let out = self.prompter.output();
        write!(out, "{}", board)?;
        writeln!(out, "{}", message)?;
        Ok(Phase::AwaitingReplayChoice)
    }

    fn ask_replay(&mut self) -> Result<Phase, SessionError> {
        writeln!(self.prompter.output(), "Play again? (yes/no)")?;
        self.prompter.output().flush()?;

        match self.prompter.read_replay_answer()? {
            Ok(ReplayChoice::Replay) => {
                info!("Starting a new game");
                self.game.reset();
                self.clear()?;
                Ok(Phase::AwaitingInput)
            }
            Ok(ReplayChoice::Quit) => Ok(Phase::Terminated),
            Err(e) => {
                self.show_error(e)?;
                Ok(Phase::AwaitingReplayChoice)
            }
        }
    }

    fn show_error(&mut self, error: TurnError) -> Result<(), SessionError> {
        let line = self
            .palette
            .paint(&format!("[ERROR]: {}", error), Color::Red);
        writeln!(self.prompter.output(), "{}", line)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.terminal.clear(self.prompter.output())?;
        Ok(())
    }
}
