//! Byte decoder for terminal input.
//!
//! Turns bytes read from a terminal in raw mode into [`RawKey`]s:
//! - UTF-8 characters (control bytes are passed through literally)
//! - CSI and SS3 cursor, editing and function keys, with xterm modifiers
//! - SGR mouse reports (1006)
//! - Alt+key as ESC prefix

use crate::input::keys::{
    KEY_BEG, KEY_BTAB, KEY_DC, KEY_DOWN, KEY_END, KEY_ENTER, KEY_HOME, KEY_IC, KEY_LEFT,
    KEY_NPAGE, KEY_PPAGE, KEY_RIGHT, KEY_UP, key_f,
};
use crate::input::{
    ButtonAction, ButtonState, KeyModifiers, MouseButton, MouseChanges, MouseStatus, RawKey,
};

const ESC: u8 = 0x1b;

/// Result of decoding the front of a byte buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// A key and the number of bytes it used.
    Key(RawKey, usize),
    /// More bytes are needed.
    Incomplete,
    /// Unrecognized bytes to skip.
    Skip(usize),
}

/// Decode one key from the start of `input`.
#[must_use]
pub fn decode_key(input: &[u8]) -> Decoded {
    let Some(&first) = input.first() else {
        return Decoded::Incomplete;
    };

    match first {
        ESC => decode_escape(input),
        0x00..=0x7f => Decoded::Key(RawKey::char(char::from(first)), 1),
        _ => decode_utf8(input),
    }
}

fn decode_escape(input: &[u8]) -> Decoded {
    let Some(&second) = input.get(1) else {
        return Decoded::Incomplete;
    };

    match second {
        b'[' => decode_csi(input),
        b'O' => decode_ss3(input),
        ESC => Decoded::Key(RawKey::char('\u{1b}'), 1),
        0x20..=0x7e => Decoded::Key(
            RawKey::char(char::from(second)).with_modifiers(KeyModifiers::ALT),
            2,
        ),
        _ => Decoded::Key(RawKey::char('\u{1b}'), 1),
    }
}

fn decode_csi(input: &[u8]) -> Decoded {
    // Parameter and intermediate bytes are 0x20..=0x3f, the final byte
    // 0x40..=0x7e. Anything else ends a malformed sequence early.
    let mut end = None;
    for (i, b) in input.iter().enumerate().skip(2) {
        match b {
            0x40..=0x7e => {
                end = Some(i);
                break;
            }
            0x20..=0x3f => {}
            _ => return Decoded::Skip(i),
        }
    }
    let Some(end) = end else {
        return Decoded::Incomplete;
    };
    let params = &input[2..end];
    let used = end + 1;

    if params.first() == Some(&b'<') {
        return decode_sgr_mouse(&params[1..], input[end], used);
    }

    let code = match input[end] {
        b'A' => KEY_UP,
        b'B' => KEY_DOWN,
        b'C' => KEY_RIGHT,
        b'D' => KEY_LEFT,
        b'H' => KEY_HOME,
        b'F' => KEY_END,
        b'E' => KEY_BEG,
        b'Z' => KEY_BTAB,
        b'~' => match tilde_code(params) {
            Some(code) => code,
            None => return Decoded::Skip(used),
        },
        _ => return Decoded::Skip(used),
    };

    Decoded::Key(RawKey::function(code).with_modifiers(csi_modifiers(params)), used)
}

fn tilde_code(params: &[u8]) -> Option<u32> {
    let num = params
        .split(|b| *b == b';')
        .next()
        .and_then(parse_number)?;
    let code = match num {
        1 | 7 => KEY_HOME,
        2 => KEY_IC,
        3 => KEY_DC,
        4 | 8 => KEY_END,
        5 => KEY_PPAGE,
        6 => KEY_NPAGE,
        11..=15 => key_f((num - 10) as u8),
        17..=21 => key_f((num - 11) as u8),
        23 | 24 => key_f((num - 12) as u8),
        _ => return None,
    };
    Some(code)
}

/// xterm modifier parameter: `1 + shift + 2*alt + 4*ctrl`.
fn csi_modifiers(params: &[u8]) -> KeyModifiers {
    let Some(n) = params.split(|b| *b == b';').nth(1).and_then(parse_number) else {
        return KeyModifiers::empty();
    };
    let n = n.saturating_sub(1);
    let mut mods = KeyModifiers::empty();
    if n & 1 != 0 {
        mods |= KeyModifiers::SHIFT;
    }
    if n & 2 != 0 {
        mods |= KeyModifiers::ALT;
    }
    if n & 4 != 0 {
        mods |= KeyModifiers::CONTROL;
    }
    mods
}

fn decode_ss3(input: &[u8]) -> Decoded {
    let Some(&key) = input.get(2) else {
        return Decoded::Incomplete;
    };
    let code = match key {
        b'P' => key_f(1),
        b'Q' => key_f(2),
        b'R' => key_f(3),
        b'S' => key_f(4),
        b'A' => KEY_UP,
        b'B' => KEY_DOWN,
        b'C' => KEY_RIGHT,
        b'D' => KEY_LEFT,
        b'H' => KEY_HOME,
        b'F' => KEY_END,
        b'M' => KEY_ENTER,
        _ => return Decoded::Skip(3),
    };
    Decoded::Key(RawKey::function(code), 3)
}

/// SGR mouse: `ESC [ < Pb ; Px ; Py M` (press) or `m` (release).
fn decode_sgr_mouse(params: &[u8], final_byte: u8, used: usize) -> Decoded {
    let mut parts = params.split(|b| *b == b';').map(parse_number);
    let (Some(Some(cb)), Some(Some(cx)), Some(Some(cy))) = (parts.next(), parts.next(), parts.next())
    else {
        return Decoded::Skip(used);
    };
    if !matches!(final_byte, b'M' | b'm') {
        return Decoded::Skip(used);
    }

    let mut modifiers = KeyModifiers::empty();
    if cb & 4 != 0 {
        modifiers |= KeyModifiers::SHIFT;
    }
    if cb & 8 != 0 {
        modifiers |= KeyModifiers::ALT;
    }
    if cb & 16 != 0 {
        modifiers |= KeyModifiers::CONTROL;
    }

    let y = i32::try_from(cy.saturating_sub(1)).unwrap_or(i32::MAX);
    let x = i32::try_from(cx.saturating_sub(1)).unwrap_or(i32::MAX);
    let low = cb & 0b11;
    let motion = cb & 32 != 0;

    let status = if cb & 64 != 0 {
        MouseStatus::wheel(y, x, low == 0)
    } else if low == 3 {
        // No button: plain motion (or a legacy release with no button id).
        if motion {
            MouseStatus::moved(y, x)
        } else {
            return Decoded::Skip(used);
        }
    } else {
        let button = MouseButton::ALL[low as usize];
        let action = if motion {
            ButtonAction::Moved
        } else if final_byte == b'm' {
            ButtonAction::Released
        } else {
            ButtonAction::Pressed
        };
        let mut status = MouseStatus::button(y, x, button, action);
        if motion {
            status.changes |= MouseChanges::MOVED;
        }
        status.buttons[button.index()] = ButtonState { action, modifiers };
        status
    };

    Decoded::Key(RawKey::mouse(status).with_modifiers(modifiers), used)
}

fn decode_utf8(input: &[u8]) -> Decoded {
    let first = input[0];
    let len = if first & 0b1110_0000 == 0b1100_0000 {
        2
    } else if first & 0b1111_0000 == 0b1110_0000 {
        3
    } else if first & 0b1111_1000 == 0b1111_0000 {
        4
    } else {
        return Decoded::Skip(1);
    };

    if input.len() < len {
        return Decoded::Incomplete;
    }

    match std::str::from_utf8(&input[..len])
        .ok()
        .and_then(|s| s.chars().next())
    {
        Some(c) => Decoded::Key(RawKey::char(c), len),
        None => Decoded::Skip(1),
    }
}

fn parse_number(bytes: &[u8]) -> Option<u32> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}
