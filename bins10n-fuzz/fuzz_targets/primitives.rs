#![no_main]

use bins10n::{ByteReader, ByteWriter, ReadSerial};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Test all primitive decoders with raw fuzz input
    // Goal: ensure none of these panic, only return Ok or Err
    let _ = u8::read_from_bytes(data);
    let _ = u16::read_from_bytes(data);
    let _ = u32::read_from_bytes(data);
    let _ = u64::read_from_bytes(data);
    let _ = i16::read_from_bytes(data);
    let _ = f64::read_from_bytes(data);
    let _ = <[u32; 4]>::read_from_bytes(data);

    // Whatever decodes must re-encode to the exact same bytes
    let mut source = data;
    if let Ok(value) = source.read_u64() {
        let mut sink = Vec::new();
        assert_eq!(sink.write_u64(value).unwrap(), 8);
        assert_eq!(sink.as_slice(), &data[..8]);
    }
});
