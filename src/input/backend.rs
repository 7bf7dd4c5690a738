//! Collaborator traits: the platform key source and the display.
//!
//! The session owns an [`InputBackend`] and borrows a [`Display`] for each
//! call. Neither is implemented here beyond the Unix TTY backend in
//! [`crate::terminal`].

use crate::error::Result;
use crate::input::keyboard::KeyModifiers;
use crate::input::keys::KEY_MOUSE;
use crate::input::mouse::MouseStatus;

/// One event as delivered by the backend, before any translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawKey {
    /// Character ordinal, or a function-key token when `special` is set.
    pub code: u32,
    /// Function key or mouse sentinel rather than a literal character.
    pub special: bool,
    /// Modifiers held when the event was read.
    pub modifiers: KeyModifiers,
    /// Mouse report accompanying the [`KEY_MOUSE`] sentinel.
    pub mouse: Option<MouseStatus>,
}

impl RawKey {
    /// A literal character.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self {
            code: u32::from(c),
            special: false,
            modifiers: KeyModifiers::empty(),
            mouse: None,
        }
    }

    /// A function-key token.
    #[must_use]
    pub fn function(code: u32) -> Self {
        Self {
            code,
            special: true,
            modifiers: KeyModifiers::empty(),
            mouse: None,
        }
    }

    /// The mouse sentinel carrying `status`.
    #[must_use]
    pub fn mouse(status: MouseStatus) -> Self {
        Self {
            code: KEY_MOUSE,
            special: true,
            modifiers: KeyModifiers::empty(),
            mouse: Some(status),
        }
    }

    /// Set the latched modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is the mouse sentinel.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        self.special && self.code == KEY_MOUSE
    }
}

/// Platform key source.
pub trait InputBackend {
    /// Non-blocking poll.
    fn has_key_ready(&mut self) -> bool;

    /// Consume one ready event. `None` if the event vanished between poll
    /// and fetch.
    fn fetch_raw_key(&mut self) -> Option<RawKey>;

    /// Suspend the caller for `millis` milliseconds.
    fn sleep_millis(&mut self, millis: u64);

    /// Throw away any input not yet fetched.
    fn discard_pending_input(&mut self);

    /// Ask the backend to report lone modifier presses as keys. Returns
    /// the setting actually in effect.
    fn set_return_modifiers(&mut self, enabled: bool) -> bool;
}

impl<B: InputBackend + ?Sized> InputBackend for &mut B {
    fn has_key_ready(&mut self) -> bool {
        (**self).has_key_ready()
    }

    fn fetch_raw_key(&mut self) -> Option<RawKey> {
        (**self).fetch_raw_key()
    }

    fn sleep_millis(&mut self, millis: u64) {
        (**self).sleep_millis(millis);
    }

    fn discard_pending_input(&mut self) {
        (**self).discard_pending_input();
    }

    fn set_return_modifiers(&mut self, enabled: bool) -> bool {
        (**self).set_return_modifiers(enabled)
    }
}

/// Opaque window handle issued by a [`Display`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

/// What the input layer needs to know about a window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowInfo {
    /// Screen row of the window origin.
    pub begin_y: i32,
    /// Screen column of the window origin.
    pub begin_x: i32,
    /// Logical cursor row, window-relative.
    pub cursor_y: i32,
    /// Logical cursor column, window-relative.
    pub cursor_x: i32,
    /// Contents changed since the last refresh.
    pub touched: bool,
    /// Pads are refreshed explicitly and never by a read.
    pub is_pad: bool,
    /// The window does not care where the physical cursor is left.
    pub leave_cursor: bool,
    /// Translate function keys instead of discarding them.
    pub keypad: bool,
    /// Reads never block.
    pub nodelay: bool,
    /// Read timeout in milliseconds; 0 is no timeout.
    pub delay_ms: u32,
}

impl WindowInfo {
    /// Absolute `(row, col)` of the logical cursor.
    #[must_use]
    pub fn screen_cursor(&self) -> (i32, i32) {
        (self.begin_y + self.cursor_y, self.begin_x + self.cursor_x)
    }
}

/// Screen collaborator.
pub trait Display {
    /// The default full-screen window.
    fn stdscr(&self) -> WindowId;

    /// Window state, or `None` for an unknown handle.
    fn window_info(&self, window: WindowId) -> Option<WindowInfo>;

    /// Absolute `(row, col)` of the physical terminal cursor.
    fn physical_cursor(&self) -> (i32, i32);

    /// Push the window's contents to the terminal.
    fn refresh(&mut self, window: WindowId) -> Result<()>;

    /// Move the window's logical cursor.
    fn move_cursor(&mut self, window: WindowId, y: i32, x: i32) -> Result<()>;

    /// Write `ch` at the window cursor and advance it.
    fn write_char(&mut self, window: WindowId, ch: char) -> Result<()>;

    /// Soft label under `(y, x)`, 1-based. `None` or `Some(0)` outside
    /// the soft-label row.
    fn soft_label_at(&self, y: i32, x: i32) -> Option<u8>;
}
