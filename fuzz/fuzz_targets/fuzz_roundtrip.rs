#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode to identical pixels
    if let Ok(decoded) = imgconv::bmp::decode(data) {
        let reencoded = imgconv::bmp::encode(&decoded).expect("decoded image must re-encode");
        let decoded2 = imgconv::bmp::decode(&reencoded).expect("re-encoded BMP failed to decode");
        assert_eq!(decoded, decoded2, "BMP roundtrip mismatch");
    }

    if let Ok(decoded) = imgconv::ppm::decode(data) {
        let reencoded = imgconv::ppm::encode(&decoded).expect("decoded image must re-encode");
        let decoded2 = imgconv::ppm::decode(&reencoded).expect("re-encoded PPM failed to decode");
        assert_eq!(decoded, decoded2, "PPM roundtrip mismatch");
    }
});
