//! Basic usage example for bins10n

use std::io::{Read, Write};

use bins10n::{ByteReader, ByteWriter, ReadSerial, Result, WriteSerial};

#[derive(Debug, Default, PartialEq)]
struct Point {
    x: u32,
    y: u32,
    label: String,
}

impl WriteSerial for Point {
    fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
        Ok(sink.write_u32(self.x)? + sink.write_u32(self.y)? + sink.write_str(&self.label)?)
    }

    fn get_size_hint(&self) -> usize {
        self.x.get_size_hint() + self.y.get_size_hint() + self.label.get_size_hint()
    }
}

impl ReadSerial for Point {
    fn read_serial<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<()> {
        self.x = source.read_u32()?;
        self.y = source.read_u32()?;
        self.label = source.read_str()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    // Serialize a point
    let point = Point { x: 10, y: 20, label: "origin".into() };
    let bytes = point.to_bytes()?;

    println!("Serialized point: {bytes:?}");
    println!("Size: {} bytes", bytes.len());

    // Deserialize back
    let decoded = Point::read_from_bytes(&bytes)?;
    println!("Decoded point: {decoded:?}");
    assert_eq!(point, decoded);

    // Optional values take no space at all when absent
    let mut sink = Vec::new();
    let written = sink.write_opt(Some(&point))? + sink.write_opt::<Point>(None)?;
    println!("\nOptional point: {written} bytes, marker byte {}", sink[0]);

    // Unsigned writers reject values that don't fit their wire width
    match sink.write_u8(300) {
        Ok(_) => unreachable!("300 does not fit into a u8"),
        Err(err) => println!("Rejected write: {err}"),
    }

    Ok(())
}
