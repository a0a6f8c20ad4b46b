#![no_main]
use libfuzzer_sys::fuzz_target;

use fcoded::FrontCodedList;

// Deserialization must reject arbitrary bytes cleanly, never panic.
fuzz_target!(|data: &[u8]| {
    let _ = FrontCodedList::<u8>::from_bytes(data);
    let _ = FrontCodedList::<i8>::from_bytes(data);
    let _ = FrontCodedList::<u16>::from_bytes(data);
    let _ = FrontCodedList::<i16>::from_bytes(data);
    let _ = FrontCodedList::<i64>::from_bytes(data);
});
