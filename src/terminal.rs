//! Screen clearing and console setup.
//!
//! The controller is picked once at startup from the host platform and the
//! settings, then handed to the session.

use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::process::{Command, Stdio};
use tracing::{debug, instrument, warn};

/// Clears the player's screen between turns.
pub trait TerminalController: std::fmt::Debug {
    /// Clears the screen.
    ///
    /// Anything buffered in `out` must reach the terminal before the screen
    /// is wiped.
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// Clears via the `clear` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixClear;

impl TerminalController for PosixClear {
    #[instrument(skip_all)]
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()> {
        run_clear_command(out, "clear", &[])
    }
}

/// Clears via `cmd /c cls`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsClear;

impl TerminalController for WindowsClear {
    #[instrument(skip_all)]
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()> {
        run_clear_command(out, "cmd", &["/c", "cls"])
    }
}

/// Never clears; used by tests and `--no-clear`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClear;

impl TerminalController for NoopClear {
    fn clear(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Picks the controller for this host.
#[instrument]
pub fn detect(clear_screen: bool) -> Box<dyn TerminalController> {
    if !clear_screen {
        debug!("Screen clearing disabled");
        Box::new(NoopClear)
    } else if cfg!(windows) {
        debug!("Using cmd /c cls");
        Box::new(WindowsClear)
    } else {
        debug!("Using clear");
        Box::new(PosixClear)
    }
}

/// Turns on ANSI escape handling for the attached console.
///
/// Only Windows consoles need this; elsewhere escapes always render.
#[instrument]
pub fn enable_ansi() -> bool {
    #[cfg(windows)]
    {
        let supported = crossterm::ansi_support::supports_ansi();
        if !supported {
            warn!("Console does not support ANSI escape sequences");
        }
        supported
    }

    #[cfg(not(windows))]
    {
        true
    }
}

/// Runs a clear-screen program against the inherited stdout.
///
/// When the program cannot be run the screen is cleared with escape
/// sequences instead, so a missing `clear` never stops the game.
fn run_clear_command(out: &mut dyn Write, program: &str, args: &[&str]) -> io::Result<()> {
    out.flush()?;

    match Command::new(program)
        .args(args)
        .stdout(Stdio::inherit())
        .status()
    {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            warn!(program, %status, "Clear command failed, clearing with escapes");
            clear_with_escapes(out)
        }
        Err(e) => {
            warn!(program, error = %e, "Clear command unavailable, clearing with escapes");
            clear_with_escapes(out)
        }
    }
}

fn clear_with_escapes(out: &mut dyn Write) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_writes_nothing() {
        let mut out = Vec::new();
        NoopClear.clear(&mut out).expect("noop clear");
        assert!(out.is_empty());
    }

    #[test]
    fn test_detect_respects_setting() {
        let controller = detect(false);
        assert_eq!(format!("{controller:?}"), "NoopClear");
    }

    #[test]
    fn test_detect_platform() {
        let controller = format!("{:?}", detect(true));
        if cfg!(windows) {
            assert_eq!(controller, "WindowsClear");
        } else {
            assert_eq!(controller, "PosixClear");
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_escape_fallback() {
        let mut out = Vec::new();
        clear_with_escapes(&mut out).expect("clear with escapes");
        assert_eq!(out, b"\x1b[2J\x1b[1;1H");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_missing_program_falls_back() {
        let mut out = Vec::new();
        run_clear_command(&mut out, "tictactoe-no-such-clear-program", &[])
            .expect("fallback clear");
        assert_eq!(out, b"\x1b[2J\x1b[1;1H");
    }
}
