//! Key dispatcher.
//!
//! [`InputSession`] turns raw backend events into the key stream an
//! application reads. It owns the session-scoped state: pushback stack,
//! cooked-mode line buffer, mode flags, mouse subscription and the
//! modifiers latched at the last fetch.
//!
//! A read goes through these stages, in order:
//!
//! 1. Refresh the window if it is stale (never for pads).
//! 2. Replay pushed-back keys, newest first.
//! 3. In cooked mode, drain a committed line.
//! 4. Poll the backend, sleeping in short slices until the timeout
//!    budget runs out.
//! 5. Drop function keys the window does not want, filter mouse events.
//! 6. Translate CR to NL, echo, then deliver or buffer by mode.

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::input::backend::{Display, InputBackend, RawKey, WindowId, WindowInfo};
use crate::input::keyboard::{Key, KeyModifiers, KeyResult};
use crate::input::keys::key_f;
use crate::input::line::LineBuffer;
use crate::input::mouse::{MouseMask, MouseOutcome, MouseStatus, classify_mouse};
use crate::input::options::{InputMode, InputOptions};
use crate::input::pushback::PushbackStack;

/// Time left for a read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Budget {
    Forever,
    Remaining(u64),
}

impl Budget {
    /// Length of the next sleep, or `None` once the budget is spent.
    fn nap(&mut self, slice: u64) -> Option<u64> {
        match self {
            Self::Forever => Some(slice),
            Self::Remaining(0) => None,
            Self::Remaining(left) => {
                let nap = slice.min(*left);
                *left -= nap;
                Some(nap)
            }
        }
    }
}

/// Session-scoped input state over a backend.
#[derive(Debug)]
pub struct InputSession<B> {
    backend: B,
    options: InputOptions,
    mode: InputMode,
    echo: bool,
    auto_cr: bool,
    half_delay_tenths: u8,
    pushback: PushbackStack,
    line: LineBuffer,
    modifiers: KeyModifiers,
    mouse_mask: MouseMask,
    last_mouse: Option<MouseStatus>,
}

impl<B: InputBackend> InputSession<B> {
    /// Create a session with default options.
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, InputOptions::default())
    }

    /// Create a session with the given options.
    pub fn with_options(backend: B, options: InputOptions) -> Self {
        Self {
            backend,
            mode: options.initial_mode,
            echo: options.echo,
            auto_cr: options.auto_cr,
            half_delay_tenths: 0,
            pushback: PushbackStack::with_capacity(options.pushback_capacity),
            line: LineBuffer::with_capacity(options.line_capacity),
            modifiers: KeyModifiers::empty(),
            mouse_mask: MouseMask::empty(),
            last_mouse: None,
            options,
        }
    }

    // ------------------------------------------------------------------
    // Reading
    // ------------------------------------------------------------------

    /// Read one key from `window`.
    ///
    /// Returns [`KeyResult::NoInput`] when the timeout budget runs out or
    /// the window is in no-delay mode with nothing ready.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWindow`] if the display does not know `window`;
    /// refresh and echo errors from the display are passed through.
    pub fn fetch_key<D>(&mut self, display: &mut D, window: WindowId) -> Result<KeyResult>
    where
        D: Display + ?Sized,
    {
        let info = display
            .window_info(window)
            .ok_or(Error::InvalidWindow(window))?;
        let mut budget = self.timeout_budget(&info);

        if needs_refresh(&info, display.physical_cursor()) {
            display.refresh(window)?;
        }

        if let Some(key) = self.pushback.pop() {
            trace!(?key, "replaying pushed-back key");
            return Ok(key.into());
        }

        if self.mode == InputMode::Cooked {
            if let Some(key) = self.line.next() {
                return Ok(key.into());
            }
        }

        self.line.reset();
        let slice = self.options.poll_interval_ms.max(1);

        loop {
            if !self.backend.has_key_ready() {
                if !self.nap(&mut budget, slice) {
                    return Ok(KeyResult::NoInput);
                }
                continue;
            }

            // A ready key that fails to materialize still costs a slice.
            let Some(raw) = self.backend.fetch_raw_key() else {
                trace!("ready key vanished before fetch");
                if !self.nap(&mut budget, slice) {
                    return Ok(KeyResult::NoInput);
                }
                continue;
            };
            self.modifiers = raw.modifiers;

            let Some(mut key) = self.translate(&*display, &info, raw) else {
                continue;
            };

            if key == Key::Char('\r') && self.auto_cr && self.mode != InputMode::Raw {
                key = Key::Char('\n');
            }

            if self.echo {
                if let Key::Char(c) = key {
                    display.write_char(window, c)?;
                    display.refresh(window)?;
                }
            }

            if self.mode.is_unbuffered() {
                return Ok(key.into());
            }

            if key == Key::Char(self.options.erase_char) {
                self.line.erase();
            } else if !self.line.append(key) {
                trace!(?key, "line buffer full, dropping key");
            }

            if matches!(key, Key::Char('\n' | '\r')) {
                if let Some(first) = self.line.next() {
                    return Ok(first.into());
                }
            }
        }
    }

    /// Read from the display's standard window.
    pub fn getch<D>(&mut self, display: &mut D) -> Result<KeyResult>
    where
        D: Display + ?Sized,
    {
        let window = display.stdscr();
        self.fetch_key(display, window)
    }

    /// Move the standard window's cursor, then read.
    pub fn mvgetch<D>(&mut self, display: &mut D, y: i32, x: i32) -> Result<KeyResult>
    where
        D: Display + ?Sized,
    {
        let window = display.stdscr();
        self.mvwgetch(display, window, y, x)
    }

    /// Move `window`'s cursor, then read from it.
    ///
    /// # Errors
    ///
    /// A failed move is returned without touching the backend.
    pub fn mvwgetch<D>(&mut self, display: &mut D, window: WindowId, y: i32, x: i32) -> Result<KeyResult>
    where
        D: Display + ?Sized,
    {
        if display.window_info(window).is_none() {
            return Err(Error::InvalidWindow(window));
        }
        display.move_cursor(window, y, x)?;
        self.fetch_key(display, window)
    }

    /// Map a raw event to a key, or `None` to keep polling.
    fn translate<D>(&mut self, display: &D, info: &WindowInfo, raw: RawKey) -> Option<Key>
    where
        D: Display + ?Sized,
    {
        if !raw.special {
            let key = char::from_u32(raw.code).map(Key::Char);
            if key.is_none() {
                trace!(code = raw.code, "discarding code outside the Unicode range");
            }
            return key;
        }

        if !info.keypad {
            trace!(code = raw.code, "keypad off, discarding function key");
            return None;
        }

        if !raw.is_mouse() {
            return Some(Key::Function(raw.code));
        }

        let mut status = raw.mouse.unwrap_or_default();
        match classify_mouse(self.mouse_mask, &mut status, |y, x| {
            display.soft_label_at(y, x)
        }) {
            MouseOutcome::Ignored => {
                debug!(?status, "mouse event filtered out");
                None
            }
            MouseOutcome::Event => {
                self.last_mouse = Some(status);
                Some(Key::Mouse)
            }
            MouseOutcome::SoftLabel(label) => {
                self.last_mouse = Some(status);
                Some(Key::Function(key_f(label)))
            }
        }
    }

    /// Sleep one slice of `budget`. `false` once it is spent.
    fn nap(&mut self, budget: &mut Budget, slice: u64) -> bool {
        let Some(millis) = budget.nap(slice) else {
            return false;
        };
        trace!(millis, "no key ready");
        self.backend.sleep_millis(millis);
        true
    }

    fn timeout_budget(&self, info: &WindowInfo) -> Budget {
        if self.half_delay_tenths > 0 {
            Budget::Remaining(u64::from(self.half_delay_tenths) * 100)
        } else if info.delay_ms > 0 {
            Budget::Remaining(u64::from(info.delay_ms))
        } else if info.nodelay {
            Budget::Remaining(0)
        } else {
            Budget::Forever
        }
    }

    // ------------------------------------------------------------------
    // Pushback and flush
    // ------------------------------------------------------------------

    /// Queue `key` to be returned by the next read, ahead of anything
    /// already queued.
    ///
    /// # Errors
    ///
    /// [`Error::PushbackOverflow`] when the stack is full; the queued
    /// values are left as they were.
    pub fn push_back(&mut self, key: impl Into<Key>) -> Result<()> {
        let key = key.into();
        self.pushback.push(key).inspect_err(|_| {
            warn!(?key, capacity = self.pushback.capacity(), "pushback stack full");
        })
    }

    /// Discard pushed-back keys, the line buffer, and unread backend input.
    pub fn flush(&mut self) {
        debug!(
            pushback = self.pushback.len(),
            buffered = self.line.unread(),
            "flushing input"
        );
        self.backend.discard_pending_input();
        self.pushback.clear();
        self.line.reset();
    }

    /// Number of pushed-back keys waiting.
    #[must_use]
    pub fn pending_pushback(&self) -> usize {
        self.pushback.len()
    }

    /// The cooked-mode line buffer.
    #[must_use]
    pub fn line_buffer(&self) -> &LineBuffer {
        &self.line
    }

    // ------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------

    /// Modifiers in effect at the last raw fetch.
    #[must_use]
    pub fn key_modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    /// Ask the backend to report lone modifier presses as keys. Returns
    /// the setting the backend actually applied.
    pub fn set_return_modifiers(&mut self, enabled: bool) -> bool {
        let applied = self.backend.set_return_modifiers(enabled);
        debug!(requested = enabled, applied, "return modifiers as keys");
        applied
    }

    // ------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        if mode != self.mode {
            debug!(from = ?self.mode, to = ?mode, "input mode change");
            self.mode = mode;
        }
    }

    pub fn cbreak(&mut self) {
        self.set_mode(InputMode::CBreak);
    }

    pub fn nocbreak(&mut self) {
        self.set_mode(InputMode::Cooked);
    }

    pub fn raw(&mut self) {
        self.set_mode(InputMode::Raw);
    }

    pub fn noraw(&mut self) {
        self.set_mode(InputMode::Cooked);
    }

    #[must_use]
    pub fn echo_enabled(&self) -> bool {
        self.echo
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    #[must_use]
    pub fn auto_cr_enabled(&self) -> bool {
        self.auto_cr
    }

    /// Translate CR to NL on input (outside raw mode).
    pub fn set_auto_cr(&mut self, auto_cr: bool) {
        self.auto_cr = auto_cr;
    }

    /// Time reads out after `tenths` tenths of a second regardless of the
    /// window's own delay. Zero turns it off.
    pub fn half_delay(&mut self, tenths: u8) {
        self.half_delay_tenths = tenths;
    }

    #[must_use]
    pub fn half_delay_tenths(&self) -> u8 {
        self.half_delay_tenths
    }

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    /// Replace the mouse subscription, returning the previous one.
    pub fn set_mouse_mask(&mut self, mask: MouseMask) -> MouseMask {
        debug!(?mask, "mouse mask");
        std::mem::replace(&mut self.mouse_mask, mask)
    }

    #[must_use]
    pub fn mouse_mask(&self) -> MouseMask {
        self.mouse_mask
    }

    /// The last mouse report delivered, already filtered.
    #[must_use]
    pub fn last_mouse(&self) -> Option<MouseStatus> {
        self.last_mouse
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// A read refreshes a stale window first, unless it is a pad.
fn needs_refresh(info: &WindowInfo, physical_cursor: (i32, i32)) -> bool {
    !info.is_pad && (info.touched || (!info.leave_cursor && info.screen_cursor() != physical_cursor))
}
