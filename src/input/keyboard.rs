//! Key values and modifier flags.

use bitflags::bitflags;

use crate::input::keys::{self, KEY_MOUSE};

bitflags! {
    /// Keyboard modifiers latched by the backend at the last raw fetch.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CONTROL = 0b0000_0010;
        /// Alt/Option key.
        const ALT = 0b0000_0100;
        /// Num Lock active.
        const NUMLOCK = 0b0000_1000;
    }
}

/// A value in the input stream.
///
/// This is what the pushback stack and the line buffer hold. Keeping
/// characters and tokens in separate variants means a wide character
/// whose ordinal falls in the token range is never mistaken for a
/// function key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A literal character.
    Char(char),
    /// A function-key token (see [`keys`]).
    Function(u32),
    /// A mouse event is available.
    Mouse,
}

impl Key {
    /// Numeric value as an integer curses API would report it.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::Char(c) => u32::from(*c),
            Self::Function(code) => *code,
            Self::Mouse => KEY_MOUSE,
        }
    }

    /// Whether this is a token rather than a literal character.
    #[must_use]
    pub fn is_token(&self) -> bool {
        !matches!(self, Self::Char(_))
    }

    /// Get the character if this is one.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Function-key number if this is an Fn token.
    #[must_use]
    pub fn function_number(&self) -> Option<u8> {
        match self {
            Self::Function(code) => keys::function_key_number(*code),
            _ => None,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Outcome of a key fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyResult {
    /// A literal character.
    Char(char),
    /// A function-key token.
    Function(u32),
    /// A mouse event passed the subscription filter.
    Mouse,
    /// Nothing arrived within the timeout, or the read was non-blocking.
    NoInput,
}

impl KeyResult {
    /// The fetched key, or `None` for [`KeyResult::NoInput`].
    #[must_use]
    pub fn key(&self) -> Option<Key> {
        match self {
            Self::Char(c) => Some(Key::Char(*c)),
            Self::Function(code) => Some(Key::Function(*code)),
            Self::Mouse => Some(Key::Mouse),
            Self::NoInput => None,
        }
    }

    /// Check if nothing was read.
    #[must_use]
    pub fn is_no_input(&self) -> bool {
        matches!(self, Self::NoInput)
    }

    /// Get the character if this is one.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<Key> for KeyResult {
    fn from(key: Key) -> Self {
        match key {
            Key::Char(c) => Self::Char(c),
            Key::Function(code) => Self::Function(code),
            Key::Mouse => Self::Mouse,
        }
    }
}

impl From<Option<Key>> for KeyResult {
    fn from(key: Option<Key>) -> Self {
        key.map_or(Self::NoInput, Self::from)
    }
}
