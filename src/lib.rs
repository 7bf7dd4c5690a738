//! `OpenTUI` input - curses-style key input
//!
//! Normalizes raw keyboard and mouse events from a terminal backend into
//! the character and key-token stream applications read, under raw,
//! cbreak or cooked (line) buffering, with echo, timeouts, pushback and
//! mouse filtering.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow input::InputSession etc
#![allow(clippy::struct_excessive_bools)] // Window state needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::should_implement_trait)] // LineBuffer::next is not an iterator
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::trivially_copy_pass_by_ref)] // &self on small Copy types reads better

pub mod error;
pub mod input;
#[cfg(unix)]
pub mod terminal;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use input::{
    Display, InputBackend, InputMode, InputOptions, InputSession, Key, KeyModifiers, KeyResult,
    MouseMask, MouseStatus, RawKey, WideKey, WindowId, WindowInfo,
};

#[cfg(unix)]
pub use terminal::TtyBackend;
