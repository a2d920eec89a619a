#![no_main]

use libfuzzer_sys::fuzz_target;
use proto_wire::message::{Any, Message};

fuzz_target!(|data: &[u8]| {
    // Fuzz message decoding - test for panics, crashes, infinite loops
    let _ = Any::decode(data);
});
