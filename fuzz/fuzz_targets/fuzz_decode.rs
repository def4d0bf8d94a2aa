#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Malformed input must produce an error, never a panic
    let _ = imgconv::bmp::decode(data);
    let _ = imgconv::ppm::decode(data);
});
