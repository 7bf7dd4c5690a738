//! Curses-style key input.
//!
//! This module turns raw backend events into the key stream an
//! application reads, under raw, cbreak or cooked (line) buffering, with
//! echo, timeouts, pushback and mouse filtering.

mod backend;
mod keyboard;
pub mod keys;
mod line;
mod mouse;
mod options;
mod pushback;
mod session;
mod wide;

pub use backend::{Display, InputBackend, RawKey, WindowId, WindowInfo};
pub use keyboard::{Key, KeyModifiers, KeyResult};
pub use line::{DEFAULT_LINE_CAPACITY, LineBuffer, MIN_LINE_CAPACITY};
pub use mouse::{
    ButtonAction, ButtonState, MOUSE_BUTTONS, MouseButton, MouseChanges, MouseMask, MouseOutcome,
    MouseStatus, classify_mouse,
};
pub use options::{DEFAULT_POLL_INTERVAL_MS, InputMode, InputOptions};
pub use pushback::{DEFAULT_PUSHBACK_CAPACITY, PushbackStack};
pub use session::InputSession;
pub use wide::WideKey;
