//! Function-key token values.
//!
//! Tokens start above the byte range so they never collide with a plain
//! 8-bit character. Wide characters can still share an ordinal with a
//! token, which is why [`Key`](crate::input::Key) keeps the two apart.

/// Marker returned by the wide-character API for a function key.
pub const KEY_CODE_YES: u32 = 0x100;

/// Lowest function-key token.
pub const KEY_MIN: u32 = KEY_BREAK;

pub const KEY_BREAK: u32 = 0x101;
pub const KEY_DOWN: u32 = 0x102;
pub const KEY_UP: u32 = 0x103;
pub const KEY_LEFT: u32 = 0x104;
pub const KEY_RIGHT: u32 = 0x105;
pub const KEY_HOME: u32 = 0x106;
pub const KEY_BACKSPACE: u32 = 0x107;
/// Base of the function-key block; `KEY_F0 + n` is Fn.
pub const KEY_F0: u32 = 0x108;
pub const KEY_DL: u32 = 0x148;
pub const KEY_IL: u32 = 0x149;
pub const KEY_DC: u32 = 0x14a;
pub const KEY_IC: u32 = 0x14b;
pub const KEY_NPAGE: u32 = 0x152;
pub const KEY_PPAGE: u32 = 0x153;
pub const KEY_ENTER: u32 = 0x157;
pub const KEY_BTAB: u32 = 0x15f;
pub const KEY_BEG: u32 = 0x160;
pub const KEY_END: u32 = 0x166;

/// Sentinel reported by a backend when a mouse event is ready.
pub const KEY_MOUSE: u32 = 0x21b;

// Lone modifier presses, only produced when the backend is asked to
// return modifiers as keys.
pub const KEY_SHIFT_L: u32 = 0x21c;
pub const KEY_SHIFT_R: u32 = 0x21d;
pub const KEY_CONTROL_L: u32 = 0x21e;
pub const KEY_CONTROL_R: u32 = 0x21f;
pub const KEY_ALT_L: u32 = 0x220;
pub const KEY_ALT_R: u32 = 0x221;

/// Highest function-key token.
pub const KEY_MAX: u32 = KEY_ALT_R;

/// Highest function-key number with a token of its own.
pub const MAX_FUNCTION_KEY: u8 = 63;

/// Token for function key `n` (F1 is `key_f(1)`).
///
/// Numbers above [`MAX_FUNCTION_KEY`] are clamped.
#[must_use]
pub const fn key_f(n: u8) -> u32 {
    let n = if n > MAX_FUNCTION_KEY { MAX_FUNCTION_KEY } else { n };
    KEY_F0 + n as u32
}

/// Inverse of [`key_f`].
#[must_use]
pub const fn function_key_number(code: u32) -> Option<u8> {
    if code >= KEY_F0 && code <= KEY_F0 + MAX_FUNCTION_KEY as u32 {
        Some((code - KEY_F0) as u8)
    } else {
        None
    }
}

/// Whether `code` falls in the token range.
#[must_use]
pub const fn is_key_token(code: u32) -> bool {
    code >= KEY_MIN && code <= KEY_MAX
}

/// Whether `code` is one of the lone-modifier tokens.
#[must_use]
pub const fn is_modifier_token(code: u32) -> bool {
    code >= KEY_SHIFT_L && code <= KEY_ALT_R
}
