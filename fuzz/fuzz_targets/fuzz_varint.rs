#![no_main]

use libfuzzer_sys::fuzz_target;
use proto_wire::wire::varint::{read_varint, write_varint};

fuzz_target!(|data: &[u8]| {
    // Fuzz the varint reader with raw bytes
    if let Ok((value, pos)) = read_varint(data, 0) {
        // Whatever decodes must re-encode to at most the bytes consumed
        let mut buf = Vec::new();
        write_varint(&mut buf, value);
        assert!(buf.len() <= pos);
    }
});
