//! Error types for key input.
//!
//! "No input available" is not an error: an exhausted timeout is a
//! normal outcome and is reported as [`KeyResult::NoInput`].
//!
//! [`KeyResult::NoInput`]: crate::input::KeyResult::NoInput

use std::io;

use crate::input::WindowId;

/// Result type alias for input operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for input operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The window handle is not known to the display.
    #[error("invalid window handle {0:?}")]
    InvalidWindow(WindowId),
    /// A cursor move preceding a read landed outside the window.
    #[error("cursor position ({y}, {x}) is outside the window")]
    CursorOutOfBounds { y: i32, x: i32 },
    /// The pushback stack is full; the value was not queued.
    #[error("pushback stack is full ({capacity} values)")]
    PushbackOverflow { capacity: usize },
    /// I/O error from the terminal backend or display.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this error is an invalid-argument condition (bad window or
    /// failed cursor positioning).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidWindow(_) | Self::CursorOutOfBounds { .. })
    }
}
