//! tictactoe - two players, one terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tictactoe::{Palette, Prompter, Session, Settings, exit_codes, terminal};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = initialize_tracing(cli.log_file.as_deref()) {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(exit_codes::FAILURE);
    }

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::DECLINED),
        Err(e) => {
            error!(error = %e, "Session aborted");
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}

/// Loads settings, wires up the terminal and plays until the players quit.
#[instrument(skip_all)]
fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    }
    .with_overrides(cli.no_color, cli.no_clear);
    info!(?settings, "Starting tictactoe");

    let color = *settings.color() && terminal::enable_ansi();
    let controller = terminal::detect(*settings.clear_screen());

    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(prompter, controller, Palette::new(color));
    session.run()?;
    Ok(())
}

/// Sends diagnostics to the log file, or to stderr when none is given.
///
/// The filter comes from `RUST_LOG` and defaults to `warn` so a normal game
/// prints nothing extra.
fn initialize_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }

    Ok(())
}
