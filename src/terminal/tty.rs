//! [`InputBackend`] over a Unix terminal descriptor.

use std::collections::VecDeque;
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};
use std::thread;
use std::time::Duration;

use crate::input::{InputBackend, KeyModifiers, RawKey};
use crate::terminal::decode::{Decoded, decode_key};
use crate::terminal::raw::{RawModeGuard, discard_input, poll_readable, read_available};

const READ_CHUNK: usize = 256;

/// Key source reading a terminal in raw mode.
///
/// Bytes are read only when the session polls, decoded, and queued until
/// fetched.
#[derive(Debug)]
pub struct TtyBackend {
    fd: RawFd,
    bytes: Vec<u8>,
    pending: VecDeque<RawKey>,
    // Restores the terminal when the backend is dropped.
    raw_mode: Option<RawModeGuard>,
}

impl TtyBackend {
    /// Read from stdin, switching it to raw mode for the backend's lifetime.
    pub fn stdin() -> io::Result<Self> {
        let stdin = io::stdin();
        let guard = RawModeGuard::new(&stdin)?;
        Ok(Self {
            raw_mode: Some(guard),
            ..Self::from_fd(&stdin)
        })
    }

    /// Read from `fd` as it is configured. The descriptor must stay open
    /// for as long as the backend is used.
    pub fn from_fd<F: AsRawFd>(fd: &F) -> Self {
        Self {
            fd: fd.as_raw_fd(),
            bytes: Vec::with_capacity(READ_CHUNK),
            pending: VecDeque::new(),
            raw_mode: None,
        }
    }

    /// Whether the descriptor was switched to raw mode by this backend.
    #[must_use]
    pub fn owns_raw_mode(&self) -> bool {
        self.raw_mode.is_some()
    }

    fn fill(&mut self) -> io::Result<()> {
        let mut chunk = [0u8; READ_CHUNK];
        while poll_readable(self.fd, 0)? {
            let n = read_available(self.fd, &mut chunk)?;
            if n == 0 {
                break;
            }
            self.bytes.extend_from_slice(&chunk[..n]);
        }
        self.decode_pending();
        Ok(())
    }

    fn decode_pending(&mut self) {
        loop {
            match decode_key(&self.bytes) {
                Decoded::Key(key, used) => {
                    self.pending.push_back(key);
                    self.bytes.drain(..used);
                }
                Decoded::Skip(used) => {
                    tracing::trace!(bytes = ?&self.bytes[..used], "skipping unrecognized input");
                    self.bytes.drain(..used);
                }
                Decoded::Incomplete => {
                    // Nothing more is readable, so a bare prefix was typed
                    // as keys: ESC alone, or Alt with `[` or `O`.
                    if let Some(key) = resolve_prefix(&self.bytes) {
                        self.pending.push_back(key);
                        self.bytes.clear();
                    }
                    break;
                }
            }
        }
    }
}

fn resolve_prefix(bytes: &[u8]) -> Option<RawKey> {
    match bytes {
        [0x1b] => Some(RawKey::char('\u{1b}')),
        [0x1b, c @ (b'[' | b'O')] => {
            Some(RawKey::char(char::from(*c)).with_modifiers(KeyModifiers::ALT))
        }
        _ => None,
    }
}

impl InputBackend for TtyBackend {
    fn has_key_ready(&mut self) -> bool {
        if self.pending.is_empty() {
            if let Err(err) = self.fill() {
                tracing::warn!(%err, "terminal read failed");
            }
        }
        !self.pending.is_empty()
    }

    fn fetch_raw_key(&mut self) -> Option<RawKey> {
        self.pending.pop_front()
    }

    fn sleep_millis(&mut self, millis: u64) {
        thread::sleep(Duration::from_millis(millis));
    }

    fn discard_pending_input(&mut self) {
        self.pending.clear();
        self.bytes.clear();
        if let Err(err) = discard_input(self.fd) {
            tracing::debug!(%err, "tcflush failed");
        }
    }

    fn set_return_modifiers(&mut self, enabled: bool) -> bool {
        // A terminal never reports a modifier pressed on its own.
        tracing::debug!(requested = enabled, "lone modifier keys unsupported on a tty");
        false
    }
}
