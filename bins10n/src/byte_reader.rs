//! Extension trait for decoding wire values from any [std::io::Read] source.

use std::io::Read;

use crate::{N_BYTES_1, N_BYTES_2, N_BYTES_4, N_BYTES_8, ReadSerial, Result, WireError};

// BYTE READER TRAIT
// ================================================================================================

/// Defines how primitive wire values are read from `Self`.
///
/// Every `read_*` method consumes exactly the number of bytes its wire type occupies. If an error
/// occurs the source is not rolled back: any bytes consumed before the failure stay consumed.
pub trait ByteReader: Read {
    // RAW BYTES
    // --------------------------------------------------------------------------------------------

    /// Returns a byte array of length `N` read from `self`.
    ///
    /// # Errors
    /// Returns [WireError::UnexpectedEof] if the source is exhausted before `N` bytes are
    /// available, or [WireError::Io] if the source fails.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf).map_err(|err| read_failed(err, N))?;
        Ok(buf)
    }

    /// Returns a byte vector of exactly `len` bytes read from `self`.
    ///
    /// # Errors
    /// Returns [WireError::UnexpectedEof] if fewer than `len` bytes could be read.
    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf).map_err(|err| read_failed(err, len))?;
        Ok(buf)
    }

    // UNSIGNED INTEGERS
    // --------------------------------------------------------------------------------------------

    /// Returns a single byte read from `self`.
    fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<N_BYTES_1>()?;
        Ok(byte)
    }

    /// Returns a u16 value read from `self` in little-endian byte order.
    fn read_u16(&mut self) -> Result<u16> {
        self.read_array::<N_BYTES_2>().map(u16::from_le_bytes)
    }

    /// Returns a u32 value read from `self` in little-endian byte order.
    fn read_u32(&mut self) -> Result<u32> {
        self.read_array::<N_BYTES_4>().map(u32::from_le_bytes)
    }

    /// Returns a u64 value read from `self` in little-endian byte order.
    fn read_u64(&mut self) -> Result<u64> {
        self.read_array::<N_BYTES_8>().map(u64::from_le_bytes)
    }

    // SIGNED INTEGERS
    // --------------------------------------------------------------------------------------------

    /// Returns a two's complement i8 value read from `self`.
    fn read_i8(&mut self) -> Result<i8> {
        self.read_array::<N_BYTES_1>().map(i8::from_le_bytes)
    }

    /// Returns a two's complement i16 value read from `self` in little-endian byte order.
    fn read_i16(&mut self) -> Result<i16> {
        self.read_array::<N_BYTES_2>().map(i16::from_le_bytes)
    }

    /// Returns a two's complement i32 value read from `self` in little-endian byte order.
    fn read_i32(&mut self) -> Result<i32> {
        self.read_array::<N_BYTES_4>().map(i32::from_le_bytes)
    }

    /// Returns a two's complement i64 value read from `self` in little-endian byte order.
    fn read_i64(&mut self) -> Result<i64> {
        self.read_array::<N_BYTES_8>().map(i64::from_le_bytes)
    }

    // FLOATING POINT
    // --------------------------------------------------------------------------------------------

    /// Returns an IEEE-754 single precision value read from `self` in little-endian byte order.
    fn read_f32(&mut self) -> Result<f32> {
        self.read_array::<N_BYTES_4>().map(f32::from_le_bytes)
    }

    /// Returns an IEEE-754 double precision value read from `self` in little-endian byte order.
    fn read_f64(&mut self) -> Result<f64> {
        self.read_array::<N_BYTES_8>().map(f64::from_le_bytes)
    }

    // STRINGS
    // --------------------------------------------------------------------------------------------

    /// Returns a string read from `self`.
    ///
    /// The string is encoded as a u16 byte count followed by exactly that many UTF-8 bytes.
    ///
    /// # Errors
    /// Returns a [WireError] if:
    /// * the length prefix or the payload could not be read in full.
    /// * the payload is not valid UTF-8.
    fn read_str(&mut self) -> Result<String> {
        let len = self.read_u16()?;
        let bytes = self.read_vec(len as usize)?;
        String::from_utf8(bytes).map_err(|err| {
            tracing::trace!(valid_up_to = err.utf8_error().valid_up_to(), "invalid UTF-8 string");
            WireError::InvalidUtf8(err)
        })
    }

    /// Same as [ByteReader::read_str], but replaces invalid UTF-8 sequences with
    /// `U+FFFD REPLACEMENT CHARACTER` instead of failing.
    fn read_str_lossy(&mut self) -> Result<String> {
        let len = self.read_u16()?;
        let bytes = self.read_vec(len as usize)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    // COMPOSITE VALUES
    // --------------------------------------------------------------------------------------------

    /// Reads a fresh `D` from `self`, starting from `D::default()`.
    fn read_value<D>(&mut self) -> Result<D>
    where
        D: ReadSerial + Default,
    {
        let mut value = D::default();
        value.read_serial(self)?;
        Ok(value)
    }

    /// Populates an existing `value` from `self`.
    fn read_into<D>(&mut self, value: &mut D) -> Result<()>
    where
        D: ReadSerial + ?Sized,
    {
        value.read_serial(self)
    }
}

impl<R: Read + ?Sized> ByteReader for R {}

// HELPERS
// ================================================================================================

#[cold]
fn read_failed(err: std::io::Error, needed: usize) -> WireError {
    let err = WireError::from_read(err, needed);
    tracing::trace!(needed, error = %err, "failed to read from source");
    err
}

// TESTS
// ================================================================================================
