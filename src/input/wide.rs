//! Wide-character reads.
//!
//! A wide character can share its ordinal with a function-key token, so
//! these reads report which of the two was fetched instead of returning a
//! bare integer.

use crate::error::Result;
use crate::input::backend::{Display, InputBackend, WindowId};
use crate::input::keyboard::{Key, KeyResult};
use crate::input::keys::{KEY_CODE_YES, KEY_MOUSE};
use crate::input::session::InputSession;

/// A key read through the wide-character API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WideKey {
    /// A literal character.
    Char(char),
    /// A function-key token, including [`KEY_MOUSE`].
    KeyCode(u32),
}

impl WideKey {
    /// Numeric value, whichever variant.
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            Self::Char(c) => u32::from(*c),
            Self::KeyCode(code) => *code,
        }
    }

    /// Whether the value is a function-key token.
    #[must_use]
    pub fn is_key_code(&self) -> bool {
        matches!(self, Self::KeyCode(_))
    }

    /// Status a curses `get_wch` would return alongside the value:
    /// [`KEY_CODE_YES`] for a token, 0 for a character.
    #[must_use]
    pub fn status(&self) -> u32 {
        if self.is_key_code() { KEY_CODE_YES } else { 0 }
    }
}

impl From<Key> for WideKey {
    fn from(key: Key) -> Self {
        match key {
            Key::Char(c) => Self::Char(c),
            Key::Function(code) => Self::KeyCode(code),
            Key::Mouse => Self::KeyCode(KEY_MOUSE),
        }
    }
}

impl From<WideKey> for Key {
    fn from(key: WideKey) -> Self {
        match key {
            WideKey::Char(c) => Self::Char(c),
            WideKey::KeyCode(KEY_MOUSE) => Self::Mouse,
            WideKey::KeyCode(code) => Self::Function(code),
        }
    }
}

impl<B: InputBackend> InputSession<B> {
    /// Wide-character read from `window`. `None` means no input.
    pub fn fetch_wide_key<D>(&mut self, display: &mut D, window: WindowId) -> Result<Option<WideKey>>
    where
        D: Display + ?Sized,
    {
        Ok(widen(self.fetch_key(display, window)?))
    }

    /// Wide-character read from the standard window.
    pub fn get_wch<D>(&mut self, display: &mut D) -> Result<Option<WideKey>>
    where
        D: Display + ?Sized,
    {
        Ok(widen(self.getch(display)?))
    }

    /// Move the standard window's cursor, then wide-read.
    pub fn mvget_wch<D>(&mut self, display: &mut D, y: i32, x: i32) -> Result<Option<WideKey>>
    where
        D: Display + ?Sized,
    {
        Ok(widen(self.mvgetch(display, y, x)?))
    }

    /// Move `window`'s cursor, then wide-read from it.
    pub fn mvwget_wch<D>(
        &mut self,
        display: &mut D,
        window: WindowId,
        y: i32,
        x: i32,
    ) -> Result<Option<WideKey>>
    where
        D: Display + ?Sized,
    {
        Ok(widen(self.mvwgetch(display, window, y, x)?))
    }

    /// Push a wide character back onto the input.
    ///
    /// # Errors
    ///
    /// [`Error::PushbackOverflow`](crate::Error::PushbackOverflow) when the
    /// stack is full.
    pub fn push_back_wide(&mut self, ch: char) -> Result<()> {
        self.push_back(Key::Char(ch))
    }
}

fn widen(result: KeyResult) -> Option<WideKey> {
    result.key().map(WideKey::from)
}
