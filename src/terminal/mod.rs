//! Unix terminal backend.
//!
//! [`TtyBackend`] reads a terminal in raw mode and decodes its byte stream
//! into the raw events an [`InputSession`](crate::input::InputSession)
//! consumes.

mod decode;
mod raw;
mod tty;

pub use decode::{Decoded, decode_key};
pub use raw::{RawModeGuard, discard_input, is_tty, poll_readable, read_available};
pub use tty::TtyBackend;
