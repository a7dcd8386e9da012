//! Process exit codes.

/// Players declined another game.
pub const DECLINED: u8 = 3;
/// Fatal error: closed input, failed output or an unreadable config file.
pub const FAILURE: u8 = 1;
