//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal.
///
/// Running without arguments starts a game right away.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not color marks and messages
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
