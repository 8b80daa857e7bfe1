use std::io;

use thiserror::Error;

/// Failures that stop the game before or while it runs.
///
/// Losing is not represented here; see [`crate::game::Outcome`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("grid side must be between {min} and {max}, got {side}")]
    InvalidSide { side: u16, min: u16, max: u16 },

    #[error("terminal is {width}x{height} but the board needs {required}x{required}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        required: u16,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
