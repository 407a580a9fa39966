#![no_main]

use bins10n::{ByteReader, ByteWriter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Lossy decoding must accept any payload that is long enough
    let mut lossy = data;
    let _ = lossy.read_str_lossy();

    let mut source = data;
    if let Ok(value) = source.read_str() {
        let mut sink = Vec::new();
        let written = sink.write_str(&value).unwrap();
        assert_eq!(&data[..written], sink.as_slice());
    }
});
