//! Extension trait for encoding wire values into any [std::io::Write] sink.

use std::io::Write;

use crate::{
    MAX_U8, MAX_U16, MAX_U32, MAX_U64, OPT_PRESENT_MARKER, Result, WriteSerial, check_bounds,
};

// BYTE WRITER TRAIT
// ================================================================================================

/// Defines how primitive wire values are written into `Self`.
///
/// Every `write_*` method returns the exact number of bytes it wrote, so callers can keep a
/// running offset. Range checks always happen before any byte reaches the sink; a failure in the
/// sink itself may still leave a partially written value behind.
pub trait ByteWriter: Write {
    /// Writes `bytes` as-is, without a length prefix.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        self.write_all(bytes)?;
        Ok(bytes.len())
    }

    // UNSIGNED INTEGERS
    // --------------------------------------------------------------------------------------------
    // Unsigned writers take any integer that widens into `i128`, so that callers holding a wider
    // or signed value go through the range check instead of a silent truncating cast.

    /// Writes a single unsigned byte.
    ///
    /// # Errors
    /// Returns [WireError::OutOfRange](crate::WireError::OutOfRange) without writing anything if
    /// `value` is not within `[0, 255]`.
    fn write_u8<V: Into<i128>>(&mut self, value: V) -> Result<usize> {
        let value = unsigned(value, MAX_U8)?;
        self.write_bytes(&[value as u8])
    }

    /// Writes a u16 value in little-endian byte order.
    ///
    /// # Errors
    /// Returns [WireError::OutOfRange](crate::WireError::OutOfRange) without writing anything if
    /// `value` is not within `[0, 65535]`.
    fn write_u16<V: Into<i128>>(&mut self, value: V) -> Result<usize> {
        let value = unsigned(value, MAX_U16)?;
        self.write_bytes(&(value as u16).to_le_bytes())
    }

    /// Writes a u32 value in little-endian byte order.
    ///
    /// # Errors
    /// Returns [WireError::OutOfRange](crate::WireError::OutOfRange) without writing anything if
    /// `value` is not within `[0, 4294967295]`.
    fn write_u32<V: Into<i128>>(&mut self, value: V) -> Result<usize> {
        let value = unsigned(value, MAX_U32)?;
        self.write_bytes(&(value as u32).to_le_bytes())
    }

    /// Writes a u64 value in little-endian byte order.
    ///
    /// # Errors
    /// Returns [WireError::OutOfRange](crate::WireError::OutOfRange) without writing anything if
    /// `value` is not within `[0, 2^64 - 1]`.
    fn write_u64<V: Into<i128>>(&mut self, value: V) -> Result<usize> {
        let value = unsigned(value, MAX_U64)?;
        self.write_bytes(&(value as u64).to_le_bytes())
    }

    // SIGNED INTEGERS
    // --------------------------------------------------------------------------------------------

    /// Writes a two's complement i8 value.
    fn write_i8(&mut self, value: i8) -> Result<usize> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a two's complement i16 value in little-endian byte order.
    fn write_i16(&mut self, value: i16) -> Result<usize> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a two's complement i32 value in little-endian byte order.
    fn write_i32(&mut self, value: i32) -> Result<usize> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a two's complement i64 value in little-endian byte order.
    fn write_i64(&mut self, value: i64) -> Result<usize> {
        self.write_bytes(&value.to_le_bytes())
    }

    // FLOATING POINT
    // --------------------------------------------------------------------------------------------

    /// Writes an IEEE-754 single precision value in little-endian byte order.
    fn write_f32(&mut self, value: f32) -> Result<usize> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes an IEEE-754 double precision value in little-endian byte order.
    fn write_f64(&mut self, value: f64) -> Result<usize> {
        self.write_bytes(&value.to_le_bytes())
    }

    // STRINGS
    // --------------------------------------------------------------------------------------------

    /// Writes `value` as a u16 byte count followed by its UTF-8 bytes.
    ///
    /// Returns `2 + value.len()`.
    ///
    /// # Errors
    /// Returns [WireError::OutOfRange](crate::WireError::OutOfRange) without writing anything if
    /// the UTF-8 encoding of `value` is longer than [MAX_STR_LEN](crate::MAX_STR_LEN) bytes.
    fn write_str(&mut self, value: &str) -> Result<usize> {
        let bytes = value.as_bytes();
        let prefix = self.write_u16(bytes.len() as u64)?;
        Ok(prefix + self.write_bytes(bytes)?)
    }

    // COMPOSITE VALUES
    // --------------------------------------------------------------------------------------------

    /// Writes an optional value.
    ///
    /// An absent value writes nothing and returns 0. A present value is written as
    /// [OPT_PRESENT_MARKER] followed by the value's own encoding, and returns one more than the
    /// number of bytes the value wrote.
    fn write_opt<T>(&mut self, value: Option<&T>) -> Result<usize>
    where
        T: WriteSerial + ?Sized,
    {
        let Some(value) = value else {
            return Ok(0);
        };

        let marker = self.write_u8(OPT_PRESENT_MARKER)?;
        Ok(marker + value.write_serial(self)?)
    }

    /// Writes a serializable value into `self`.
    fn write_value<T>(&mut self, value: &T) -> Result<usize>
    where
        T: WriteSerial + ?Sized,
    {
        value.write_serial(self)
    }
}

impl<W: Write + ?Sized> ByteWriter for W {}

// HELPERS
// ================================================================================================

/// Widens `value` and checks that it fits into `[0, max]`.
fn unsigned<V: Into<i128>>(value: V, max: impl Into<i128>) -> Result<i128> {
    let value = value.into();
    check_bounds(value, 0, max.into())?;
    Ok(value)
}

// TESTS
// ================================================================================================
