//! Fuzz target for the terminal key decoder.
//!
//! Arbitrary bytes must decode without panicking, and every step must
//! consume input or stop.

#![no_main]

use libfuzzer_sys::fuzz_target;
use opentui_input::terminal::{Decoded, decode_key};

fuzz_target!(|data: &[u8]| {
    let mut remaining = data;

    while !remaining.is_empty() {
        match decode_key(remaining) {
            Decoded::Key(key, used) => {
                assert!(used > 0 && used <= remaining.len(), "bad length {used}");
                if let Some(status) = key.mouse {
                    assert!(status.x >= 0 && status.y >= 0);
                }
                remaining = &remaining[used..];
            }
            Decoded::Skip(used) => {
                assert!(used > 0 && used <= remaining.len(), "bad skip {used}");
                remaining = &remaining[used..];
            }
            Decoded::Incomplete => break,
        }
    }
});
