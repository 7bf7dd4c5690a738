//! Fuzz target for cooked-mode line assembly.
//!
//! Feeds arbitrary keystrokes through a line buffer and checks the index
//! ordering after every operation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use opentui_input::Key;
use opentui_input::input::LineBuffer;

fuzz_target!(|data: &[u8]| {
    let Some((&size, keys)) = data.split_first() else {
        return;
    };
    let mut line = LineBuffer::with_capacity(usize::from(size));

    for &byte in keys {
        match byte {
            0x08 => {
                line.erase();
            }
            0x00 => line.reset(),
            b'\n' => while line.next().is_some() {},
            _ => {
                line.append(Key::Char(char::from(byte)));
            }
        }
        assert!(line.read_index() <= line.write_index());
        assert!(line.write_index() <= line.capacity() - 2);
    }
});
