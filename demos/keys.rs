//! Demo: Keyboard and Mouse Input
//!
//! Demonstrates:
//! - Reading keys from the terminal through `TtyBackend`
//! - Switching between cbreak and cooked buffering
//! - Mouse subscription and pushback
//!
//! Keys: `q` quits, `m` toggles cooked mode, `u` pushes a key back.

use opentui_input::input::keys::{
    KEY_MOUSE, function_key_number, is_key_token, is_modifier_token,
};
use opentui_input::{
    Display, InputSession, KeyResult, MouseMask, Result, TtyBackend, WindowId, WindowInfo,
};
use std::io::{self, Write};

/// The whole terminal as one window, written straight to stdout.
struct Screen {
    info: WindowInfo,
    physical: (i32, i32),
}

impl Display for Screen {
    fn stdscr(&self) -> WindowId {
        WindowId(0)
    }

    fn window_info(&self, window: WindowId) -> Option<WindowInfo> {
        (window == WindowId(0)).then_some(self.info)
    }

    fn physical_cursor(&self) -> (i32, i32) {
        self.physical
    }

    fn refresh(&mut self, _window: WindowId) -> Result<()> {
        io::stdout().flush()?;
        self.info.touched = false;
        self.physical = self.info.screen_cursor();
        Ok(())
    }

    fn move_cursor(&mut self, _window: WindowId, y: i32, x: i32) -> Result<()> {
        self.info.cursor_y = y;
        self.info.cursor_x = x;
        Ok(())
    }

    fn write_char(&mut self, _window: WindowId, ch: char) -> Result<()> {
        let mut out = io::stdout();
        match ch {
            '\n' => write!(out, "\r\n")?,
            '\u{8}' | '\u{7f}' => write!(out, "\u{8} \u{8}")?,
            c => write!(out, "{c}")?,
        }
        self.info.touched = true;
        Ok(())
    }

    fn soft_label_at(&self, _y: i32, _x: i32) -> Option<u8> {
        None
    }
}

fn main() -> Result<()> {
    let backend = TtyBackend::stdin()?;
    let mut session = InputSession::with_options(
        backend,
        opentui_input::InputOptions::new().with_erase_char('\u{7f}'),
    );
    session.cbreak();
    session.set_echo(false);
    session.set_mouse_mask(MouseMask::ALL_MOUSE_EVENTS);
    session.set_return_modifiers(true);

    let mut screen = Screen {
        info: WindowInfo {
            keypad: true,
            ..WindowInfo::default()
        },
        physical: (0, 0),
    };

    // SGR mouse reporting on, restored below.
    print!("\x1b[?1000h\x1b[?1006h");
    print!("q quits, m toggles cooked mode, u pushes 'u' back\r\n");

    loop {
        let line = match session.getch(&mut screen)? {
            KeyResult::Char('q') => break,
            KeyResult::Char('m') => {
                if session.mode().is_unbuffered() {
                    session.nocbreak();
                    session.set_echo(true);
                } else {
                    session.cbreak();
                    session.set_echo(false);
                }
                format!("mode: {:?}", session.mode())
            }
            KeyResult::Char('u') => {
                session.push_back('U')?;
                "pushed back 'U'".to_string()
            }
            KeyResult::Char(c) if is_key_token(u32::from(c)) => {
                format!("char {c:?} ({:#x}, same value as a key token)", u32::from(c))
            }
            KeyResult::Char(c) => format!("char {c:?} ({:#x})", u32::from(c)),
            KeyResult::Function(code) if is_modifier_token(code) => {
                format!("modifier key {code:#o}")
            }
            KeyResult::Function(code) => match function_key_number(code) {
                Some(n) => format!("F{n}"),
                None => format!("key {code:#o} {:?}", session.key_modifiers()),
            },
            KeyResult::Mouse => {
                let status = session.last_mouse().unwrap_or_default();
                format!(
                    "mouse ({KEY_MOUSE:#o}) at {},{} {:?}",
                    status.y, status.x, status.changes
                )
            }
            KeyResult::NoInput => continue,
        };
        print!("{line}\r\n");
        io::stdout().flush()?;
    }

    print!("\x1b[?1006l\x1b[?1000l");
    io::stdout().flush()?;
    Ok(())
}
