//! Mock display for input session tests.
//!
//! Tracks per-window state the input layer reads, records every refresh
//! and every echoed character, and models a soft-label row.

use opentui_input::input::{Display, WindowId, WindowInfo};
use opentui_input::{Error, Result};
use std::collections::BTreeMap;

/// One window of the mock display.
#[derive(Clone, Debug)]
pub struct MockWindow {
    pub info: WindowInfo,
    pub height: i32,
    pub width: i32,
    /// Characters echoed into the window.
    pub echoed: String,
}

/// A display with a standard screen and optional extra windows.
#[derive(Debug)]
pub struct MockDisplay {
    windows: BTreeMap<WindowId, MockWindow>,
    next_id: u32,
    physical_cursor: (i32, i32),
    /// Refresh calls, in order.
    pub refreshes: Vec<WindowId>,
    /// Soft-label row: `(row, label_width, label_count)`.
    pub soft_labels: Option<(i32, i32, u8)>,
}

pub const STDSCR: WindowId = WindowId(0);

impl MockDisplay {
    /// An 80x24 display with a clean standard window, cursor at the origin.
    pub fn new() -> Self {
        let mut display = Self {
            windows: BTreeMap::new(),
            next_id: 0,
            physical_cursor: (0, 0),
            refreshes: Vec::new(),
            soft_labels: None,
        };
        display.new_window(24, 80, 0, 0);
        display
    }

    /// Add a window and return its handle.
    pub fn new_window(&mut self, height: i32, width: i32, begin_y: i32, begin_x: i32) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.insert(
            id,
            MockWindow {
                info: WindowInfo {
                    begin_y,
                    begin_x,
                    ..WindowInfo::default()
                },
                height,
                width,
                echoed: String::new(),
            },
        );
        id
    }

    /// Remove a window; its handle becomes invalid.
    pub fn delete_window(&mut self, id: WindowId) {
        self.windows.remove(&id);
    }

    pub fn window(&self, id: WindowId) -> &MockWindow {
        &self.windows[&id]
    }

    pub fn window_mut(&mut self, id: WindowId) -> &mut MockWindow {
        self.windows.get_mut(&id).expect("unknown window")
    }

    /// Edit the input-relevant state of a window.
    pub fn configure(&mut self, id: WindowId, f: impl FnOnce(&mut WindowInfo)) {
        f(&mut self.window_mut(id).info);
    }

    pub fn set_physical_cursor(&mut self, y: i32, x: i32) {
        self.physical_cursor = (y, x);
    }

    /// Characters echoed into `id`.
    pub fn echoed(&self, id: WindowId) -> &str {
        &self.window(id).echoed
    }

    /// Number of refreshes of `id`.
    pub fn refresh_count(&self, id: WindowId) -> usize {
        self.refreshes.iter().filter(|w| **w == id).count()
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for MockDisplay {
    fn stdscr(&self) -> WindowId {
        STDSCR
    }

    fn window_info(&self, window: WindowId) -> Option<WindowInfo> {
        self.windows.get(&window).map(|w| w.info)
    }

    fn physical_cursor(&self) -> (i32, i32) {
        self.physical_cursor
    }

    fn refresh(&mut self, window: WindowId) -> Result<()> {
        let win = self
            .windows
            .get_mut(&window)
            .ok_or(Error::InvalidWindow(window))?;
        win.info.touched = false;
        self.physical_cursor = win.info.screen_cursor();
        self.refreshes.push(window);
        Ok(())
    }

    fn move_cursor(&mut self, window: WindowId, y: i32, x: i32) -> Result<()> {
        let win = self
            .windows
            .get_mut(&window)
            .ok_or(Error::InvalidWindow(window))?;
        if y < 0 || x < 0 || y >= win.height || x >= win.width {
            return Err(Error::CursorOutOfBounds { y, x });
        }
        win.info.cursor_y = y;
        win.info.cursor_x = x;
        Ok(())
    }

    fn write_char(&mut self, window: WindowId, ch: char) -> Result<()> {
        let win = self
            .windows
            .get_mut(&window)
            .ok_or(Error::InvalidWindow(window))?;
        win.echoed.push(ch);
        win.info.cursor_x = (win.info.cursor_x + 1).min(win.width - 1);
        win.info.touched = true;
        Ok(())
    }

    fn soft_label_at(&self, y: i32, x: i32) -> Option<u8> {
        let (row, label_width, count) = self.soft_labels?;
        if y != row || x < 0 {
            return Some(0);
        }
        let label = x / label_width + 1;
        if label > i32::from(count) {
            Some(0)
        } else {
            Some(label as u8)
        }
    }
}
