//! Two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`tictactoe_rules`]; this crate is the terminal
//! front end around them.
//!
//! # Architecture
//!
//! - **Session**: the game loop state machine, one transition per step
//! - **Prompter**: reads rows, columns and replay answers
//! - **Renderer**: draws the board as bordered text
//! - **Terminal**: clears the screen the way the host platform does
//! - **Settings**: optional TOML file plus command-line switches
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use tictactoe::{Palette, Prompter, Session, terminal};
//!
//! # fn example() -> Result<(), tictactoe::SessionError> {
//! let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
//! let mut session = Session::new(prompter, terminal::detect(true), Palette::default());
//! session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
pub mod exit_codes;
mod input;
mod render;
mod session;
mod style;
pub mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Errors
pub use error::{SessionError, TurnError};

// Crate-level exports - Input
pub use input::{Prompter, ReplayChoice};

// Crate-level exports - Rendering
pub use render::render_board;
pub use style::{Color, Palette, RESET};

// Crate-level exports - Game loop
pub use session::{Phase, Session};

// Crate-level exports - Terminal control
pub use terminal::{NoopClear, PosixClear, TerminalController, WindowsClear};

// Crate-level exports - Game types
pub use tictactoe_rules::{Board, Cell, Coordinate, Game, MoveError, Outcome, Player};
