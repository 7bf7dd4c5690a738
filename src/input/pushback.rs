//! Pushback stack for values reinserted ahead of live input.

use crate::error::{Error, Result};
use crate::input::keyboard::Key;

/// Default number of values the stack holds.
pub const DEFAULT_PUSHBACK_CAPACITY: usize = 256;

/// Bounded LIFO of keys replayed before any live input.
///
/// A push past capacity is rejected and leaves the existing entries
/// untouched.
#[derive(Clone, Debug)]
pub struct PushbackStack {
    keys: Vec<Key>,
    capacity: usize,
}

impl Default for PushbackStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_PUSHBACK_CAPACITY)
    }
}

impl PushbackStack {
    /// Create a stack holding at most `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a value on top of the stack.
    pub fn push(&mut self, key: Key) -> Result<()> {
        if self.keys.len() >= self.capacity {
            return Err(Error::PushbackOverflow {
                capacity: self.capacity,
            });
        }
        self.keys.push(key);
        Ok(())
    }

    /// Pop the most recently pushed value.
    pub fn pop(&mut self) -> Option<Key> {
        self.keys.pop()
    }

    /// Peek at the value the next pop would return.
    #[must_use]
    pub fn peek(&self) -> Option<&Key> {
        self.keys.last()
    }

    /// Drop every queued value.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.keys.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
