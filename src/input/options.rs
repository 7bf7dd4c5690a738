//! Input session configuration.

use crate::input::line::{DEFAULT_LINE_CAPACITY, MIN_LINE_CAPACITY};
use crate::input::pushback::DEFAULT_PUSHBACK_CAPACITY;

/// Default sleep between polls while waiting for a key.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Buffering discipline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Line at a time with erase editing.
    #[default]
    Cooked,
    /// Character at a time.
    CBreak,
    /// Character at a time, no CR translation.
    Raw,
}

impl InputMode {
    /// Whether input is handed out without line assembly.
    #[must_use]
    pub fn is_unbuffered(self) -> bool {
        !matches!(self, Self::Cooked)
    }
}

/// Options for an [`InputSession`](crate::input::InputSession).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputOptions {
    /// Pushback stack size.
    pub pushback_capacity: usize,
    /// Cooked-mode line buffer size; two slots are reserved.
    pub line_capacity: usize,
    /// Character that deletes the previous one in cooked mode.
    pub erase_char: char,
    /// Sleep slice of the poll loop.
    pub poll_interval_ms: u64,
    /// Mode the session starts in.
    pub initial_mode: InputMode,
    /// Echo typed characters into the window.
    pub echo: bool,
    /// Translate carriage return to newline outside raw mode.
    pub auto_cr: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            pushback_capacity: DEFAULT_PUSHBACK_CAPACITY,
            line_capacity: DEFAULT_LINE_CAPACITY,
            erase_char: '\u{8}',
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            initial_mode: InputMode::Cooked,
            echo: true,
            auto_cr: true,
        }
    }
}

impl InputOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pushback_capacity(mut self, capacity: usize) -> Self {
        self.pushback_capacity = capacity;
        self
    }

    /// Line buffer size, raised to the minimum of 3 if smaller.
    #[must_use]
    pub fn with_line_capacity(mut self, capacity: usize) -> Self {
        self.line_capacity = capacity.max(MIN_LINE_CAPACITY);
        self
    }

    #[must_use]
    pub fn with_erase_char(mut self, erase: char) -> Self {
        self.erase_char = erase;
        self
    }

    /// Poll sleep slice; zero is raised to 1ms so a timed read always
    /// makes progress.
    #[must_use]
    pub fn with_poll_interval_ms(mut self, millis: u64) -> Self {
        self.poll_interval_ms = millis.max(1);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: InputMode) -> Self {
        self.initial_mode = mode;
        self
    }

    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    #[must_use]
    pub fn with_auto_cr(mut self, auto_cr: bool) -> Self {
        self.auto_cr = auto_cr;
        self
    }
}
