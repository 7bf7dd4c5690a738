//! Line buffer for cooked-mode input assembly.

use crate::input::keyboard::Key;

/// Default line buffer size.
pub const DEFAULT_LINE_CAPACITY: usize = 512;

/// Smallest capacity that still leaves room for one value.
pub const MIN_LINE_CAPACITY: usize = 3;

/// Fixed-capacity store for a line being typed in cooked mode.
///
/// `put` is the write index and `get` the read index, with
/// `get <= put <= capacity - 2`. The last two slots are kept free, so a
/// full buffer silently drops further values.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    keys: Vec<Key>,
    get: usize,
    capacity: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LINE_CAPACITY)
    }
}

impl LineBuffer {
    /// Create a buffer; `capacity` is raised to [`MIN_LINE_CAPACITY`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_LINE_CAPACITY);
        Self {
            keys: Vec::with_capacity(capacity - 2),
            get: 0,
            capacity,
        }
    }

    /// Append a value. Returns `false` if the buffer is full and the value
    /// was dropped.
    pub fn append(&mut self, key: Key) -> bool {
        if self.keys.len() >= self.limit() {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Remove the last value not yet read. No-op on an empty line.
    pub fn erase(&mut self) -> bool {
        if self.keys.len() > self.get {
            self.keys.pop();
            true
        } else {
            false
        }
    }

    /// Check if there are values left to read.
    #[must_use]
    pub fn has_unread(&self) -> bool {
        self.get < self.keys.len()
    }

    /// Read the next value, advancing the read index.
    pub fn next(&mut self) -> Option<Key> {
        let key = self.keys.get(self.get).copied()?;
        self.get += 1;
        Some(key)
    }

    /// Empty the buffer, both indices back to 0.
    pub fn reset(&mut self) {
        self.keys.clear();
        self.get = 0;
    }

    /// Read index.
    #[must_use]
    pub fn read_index(&self) -> usize {
        self.get
    }

    /// Write index.
    #[must_use]
    pub fn write_index(&self) -> usize {
        self.keys.len()
    }

    /// Number of values not yet read.
    #[must_use]
    pub fn unread(&self) -> usize {
        self.keys.len() - self.get
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.keys.len() >= self.limit()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn limit(&self) -> usize {
        self.capacity - 2
    }
}
