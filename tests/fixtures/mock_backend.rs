//! Scripted input backend.
//!
//! Events are queued with an arrival time on a virtual clock. Sleeping
//! advances the clock instead of blocking, so timeout tests are exact and
//! instant.

use opentui_input::input::{InputBackend, KeyModifiers, MouseStatus, RawKey};
use std::collections::VecDeque;

/// A backend that replays queued raw events.
#[derive(Debug, Default)]
pub struct MockBackend {
    /// Queued `(arrival_ms, event)` pairs, in arrival order.
    queue: VecDeque<(u64, RawKey)>,
    /// Virtual time in milliseconds.
    clock_ms: u64,
    /// Every sleep requested, in order.
    pub sleeps: Vec<u64>,
    /// Number of readiness polls.
    pub polls: usize,
    /// Number of raw fetches.
    pub fetches: usize,
    /// Number of discard requests.
    pub discards: usize,
    /// Whether lone modifier keys can be reported.
    pub supports_modifier_keys: bool,
    /// Last requested modifier-key setting.
    pub return_modifiers: bool,
    /// Polls that claim a key is ready when the fetch then yields nothing.
    pub spurious_ready: usize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend with `chars` ready immediately.
    pub fn with_chars(chars: &str) -> Self {
        let mut backend = Self::new();
        backend.queue_str(chars);
        backend
    }

    /// Queue an event available now.
    pub fn queue(&mut self, key: RawKey) {
        self.queue_at(self.clock_ms, key);
    }

    /// Queue an event that arrives at `arrival_ms` on the virtual clock.
    pub fn queue_at(&mut self, arrival_ms: u64, key: RawKey) {
        self.queue.push_back((arrival_ms, key));
    }

    pub fn queue_char(&mut self, c: char) {
        self.queue(RawKey::char(c));
    }

    pub fn queue_str(&mut self, s: &str) {
        for c in s.chars() {
            self.queue_char(c);
        }
    }

    pub fn queue_function(&mut self, code: u32) {
        self.queue(RawKey::function(code));
    }

    pub fn queue_function_with_modifiers(&mut self, code: u32, modifiers: KeyModifiers) {
        self.queue(RawKey::function(code).with_modifiers(modifiers));
    }

    pub fn queue_mouse(&mut self, status: MouseStatus) {
        self.queue(RawKey::mouse(status));
    }

    /// Queue a non-special event with an arbitrary code.
    pub fn queue_raw_code(&mut self, code: u32) {
        self.queue(RawKey {
            code,
            special: false,
            modifiers: KeyModifiers::empty(),
            mouse: None,
        });
    }

    /// Virtual time elapsed.
    pub fn elapsed_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Events not yet fetched.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputBackend for MockBackend {
    fn has_key_ready(&mut self) -> bool {
        self.polls += 1;
        if self.spurious_ready > 0 {
            return true;
        }
        self.queue
            .front()
            .is_some_and(|(arrival, _)| *arrival <= self.clock_ms)
    }

    fn fetch_raw_key(&mut self) -> Option<RawKey> {
        self.fetches += 1;
        if self.spurious_ready > 0 {
            self.spurious_ready -= 1;
            return None;
        }
        match self.queue.front() {
            Some((arrival, _)) if *arrival <= self.clock_ms => self.queue.pop_front().map(|(_, k)| k),
            _ => None,
        }
    }

    fn sleep_millis(&mut self, millis: u64) {
        self.sleeps.push(millis);
        self.clock_ms += millis;
    }

    fn discard_pending_input(&mut self) {
        self.discards += 1;
        let now = self.clock_ms;
        self.queue.retain(|(arrival, _)| *arrival > now);
    }

    fn set_return_modifiers(&mut self, enabled: bool) -> bool {
        self.return_modifiers = enabled;
        enabled && self.supports_modifier_keys
    }
}
