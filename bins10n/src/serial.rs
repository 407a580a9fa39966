//! Capability traits through which composite types take part in encoding and decoding.

use std::io::{Read, Write};

use crate::{ByteReader, ByteWriter, N_BYTES_1, N_BYTES_2, Result};

// CAPABILITY TRAITS
// ================================================================================================

/// Defines how `Self` is encoded into a byte sink.
pub trait WriteSerial {
    /// Encodes `self` into `sink` and returns the number of bytes written.
    fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize>;

    /// Returns an estimate of how many bytes are needed to represent self.
    ///
    /// The default implementation returns zero.
    fn get_size_hint(&self) -> usize {
        0
    }

    /// Encodes `self` into a vector of bytes.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.get_size_hint());
        self.write_serial(&mut bytes)?;
        Ok(bytes)
    }
}

/// Defines how `Self` is populated from a byte source.
///
/// Unlike a constructor, [ReadSerial::read_serial] fills in an existing value. Types that also
/// implement [Default] can be read into a fresh value via [ByteReader::read_value] or
/// [ReadSerial::read_from_bytes].
pub trait ReadSerial {
    /// Reads bytes from `source` and overwrites `self` with the decoded value.
    ///
    /// If an error is returned, `self` may be left partially updated.
    fn read_serial<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<()>;

    /// Decodes a fresh `Self` from the start of `bytes`.
    ///
    /// Note: if `bytes` contains more data than needed to decode `Self`, no error is returned.
    fn read_from_bytes(bytes: &[u8]) -> Result<Self>
    where
        Self: Sized + Default,
    {
        let mut source = bytes;
        source.read_value()
    }
}

// SCALARS
// ================================================================================================

macro_rules! impl_scalar_serial {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            impl WriteSerial for $ty {
                fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
                    sink.$write(*self)
                }

                fn get_size_hint(&self) -> usize {
                    core::mem::size_of::<$ty>()
                }
            }

            impl ReadSerial for $ty {
                fn read_serial<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<()> {
                    *self = source.$read()?;
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_serial! {
    u8 => write_u8, read_u8;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    i8 => write_i8, read_i8;
    i16 => write_i16, read_i16;
    i32 => write_i32, read_i32;
    i64 => write_i64, read_i64;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
}

// STRINGS
// ================================================================================================

impl WriteSerial for str {
    fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
        sink.write_str(self)
    }

    fn get_size_hint(&self) -> usize {
        N_BYTES_2 + self.len()
    }
}

impl WriteSerial for String {
    fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
        self.as_str().write_serial(sink)
    }

    fn get_size_hint(&self) -> usize {
        self.as_str().get_size_hint()
    }
}

impl ReadSerial for String {
    fn read_serial<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<()> {
        *self = source.read_str()?;
        Ok(())
    }
}

// OPTIONAL VALUES
// ================================================================================================

// There is no matching `ReadSerial` impl: an absent value occupies zero bytes, so presence cannot
// be recovered from the stream alone.
impl<T: WriteSerial> WriteSerial for Option<T> {
    fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
        sink.write_opt(self.as_ref())
    }

    fn get_size_hint(&self) -> usize {
        self.as_ref().map(|v| N_BYTES_1 + v.get_size_hint()).unwrap_or(0)
    }
}

// CONTAINERS AND WRAPPERS
// ================================================================================================

impl<T: WriteSerial, const N: usize> WriteSerial for [T; N] {
    fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
        let mut written = 0;
        for item in self {
            written += item.write_serial(sink)?;
        }
        Ok(written)
    }

    fn get_size_hint(&self) -> usize {
        self.iter().map(|item| item.get_size_hint()).sum()
    }
}

impl<T: ReadSerial, const N: usize> ReadSerial for [T; N] {
    fn read_serial<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<()> {
        for item in self.iter_mut() {
            item.read_serial(source)?;
        }
        Ok(())
    }
}

impl<T: WriteSerial + ?Sized> WriteSerial for &T {
    fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
        (*self).write_serial(sink)
    }

    fn get_size_hint(&self) -> usize {
        (*self).get_size_hint()
    }
}

impl<T: WriteSerial + ?Sized> WriteSerial for Box<T> {
    fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
        self.as_ref().write_serial(sink)
    }

    fn get_size_hint(&self) -> usize {
        self.as_ref().get_size_hint()
    }
}

impl<T: ReadSerial + ?Sized> ReadSerial for Box<T> {
    fn read_serial<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<()> {
        self.as_mut().read_serial(source)
    }
}

impl WriteSerial for () {
    fn write_serial<W: Write + ?Sized>(&self, _sink: &mut W) -> Result<usize> {
        Ok(0)
    }
}

impl ReadSerial for () {
    fn read_serial<R: Read + ?Sized>(&mut self, _source: &mut R) -> Result<()> {
        Ok(())
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{OPT_PRESENT_MARKER, WireError};

    #[derive(Debug, Default, PartialEq)]
    struct Reading {
        sensor: u16,
        celsius: f32,
        label: String,
    }

    impl WriteSerial for Reading {
        fn write_serial<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
            let mut written = sink.write_u16(self.sensor)?;
            written += sink.write_f32(self.celsius)?;
            written += sink.write_str(&self.label)?;
            Ok(written)
        }

        fn get_size_hint(&self) -> usize {
            self.sensor.get_size_hint() + self.celsius.get_size_hint() + self.label.get_size_hint()
        }
    }

    impl ReadSerial for Reading {
        fn read_serial<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<()> {
            self.sensor = source.read_u16()?;
            self.celsius = source.read_f32()?;
            self.label = source.read_str()?;
            Ok(())
        }
    }

    fn reading() -> Reading {
        Reading { sensor: 513, celsius: -4.25, label: "roof".into() }
    }

    #[test]
    fn composite_type_roundtrip() {
        let value = reading();
        let bytes = value.to_bytes().unwrap();
        assert_eq!(bytes.len(), 2 + 4 + 2 + 4);
        assert_eq!(bytes.len(), value.get_size_hint());

        assert_eq!(Reading::read_from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn read_serial_overwrites_existing_value() {
        let bytes = reading().to_bytes().unwrap();
        let mut value = Reading { sensor: 1, celsius: 1.0, label: "stale".into() };

        let mut source = bytes.as_slice();
        source.read_into(&mut value).unwrap();
        assert_eq!(value, reading());
        assert!(source.is_empty());
    }

    #[test]
    fn optional_composite_writes_marker_then_value() {
        let value = reading();
        let inner = value.to_bytes().unwrap();

        let mut sink = Vec::new();
        let written = sink.write_opt(Some(&value)).unwrap();
        assert_eq!(written, 1 + inner.len());
        assert_eq!(sink[0], OPT_PRESENT_MARKER);
        assert_eq!(&sink[1..], inner.as_slice());

        assert_eq!(None::<Reading>.to_bytes().unwrap(), Vec::<u8>::new());
        assert_eq!(Some(value).get_size_hint(), 1 + inner.len());
    }

    #[test]
    fn arrays_encode_each_element_in_order() {
        let value = [1_u16, 2, 3];
        let bytes = value.to_bytes().unwrap();
        assert_eq!(bytes, [0x01, 0x00, 0x02, 0x00, 0x03, 0x00]);
        assert_eq!(<[u16; 3]>::read_from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn truncated_composite_fails_with_short_read() {
        let bytes = reading().to_bytes().unwrap();
        assert_matches!(
            Reading::read_from_bytes(&bytes[..bytes.len() - 1]),
            Err(WireError::UnexpectedEof { needed: 4 })
        );
    }

    #[test]
    fn references_and_boxes_delegate() {
        let value = 0x1234_u16;
        assert_eq!((&value).to_bytes().unwrap(), [0x34, 0x12]);
        assert_eq!(Box::new(value).to_bytes().unwrap(), [0x34, 0x12]);

        let boxed = Box::<u16>::read_from_bytes(&[0x34, 0x12]).unwrap();
        assert_eq!(*boxed, value);
    }

    #[test]
    fn test_size_hints() {
        assert_eq!(().get_size_hint(), 0);
        assert_eq!(42u8.get_size_hint(), 1);
        assert_eq!(42u16.get_size_hint(), 2);
        assert_eq!(42u32.get_size_hint(), 4);
        assert_eq!(42u64.get_size_hint(), 8);
        assert_eq!((-1i8).get_size_hint(), 1);
        assert_eq!(1.0f64.get_size_hint(), 8);
        assert_eq!("hello".get_size_hint(), 7);

        // Option with Some should include the marker byte
        assert_eq!(Some(42u32).get_size_hint(), 1 + 4);
        assert_eq!(None::<u32>.get_size_hint(), 0);

        // Array should sum all elements
        assert_eq!([1u8, 2, 3].get_size_hint(), 3);
    }

    #[test]
    fn unit_occupies_no_bytes() {
        assert!(().to_bytes().unwrap().is_empty());
        <()>::read_from_bytes(&[]).unwrap();
    }
}
