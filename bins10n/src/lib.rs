//! Minimal binary serialization primitives.
//!
//! This crate reads and writes scalar numbers, UTF-8 strings and optional values to any
//! [std::io::Read] source or [std::io::Write] sink using a fixed wire encoding:
//!
//! - all multi-byte scalars are little-endian and fixed-width;
//! - strings are a `u16` byte-length prefix followed by the raw UTF-8 bytes;
//! - an optional value is omitted entirely when absent, and is a `0` marker byte followed by the
//!   value's own encoding when present.
//!
//! Decoding is exposed through the [ByteReader] extension trait and encoding through the
//! [ByteWriter] extension trait, both implemented for every std reader/writer. Composite types
//! plug into the same machinery by implementing [ReadSerial] and [WriteSerial].
//!
//! ```
//! use bins10n::{ByteReader, ByteWriter};
//!
//! let mut bytes = Vec::new();
//! assert_eq!(bytes.write_u32(2552447309_u32).unwrap(), 4);
//! assert_eq!(bytes, [0x4d, 0x41, 0x23, 0x98]);
//!
//! let mut source = bytes.as_slice();
//! assert_eq!(source.read_u32().unwrap(), 2552447309);
//! ```

mod bounds;
mod byte_reader;
mod byte_writer;
mod error;
mod serial;

pub use bounds::check_bounds;
pub use byte_reader::ByteReader;
pub use byte_writer::ByteWriter;
pub use error::{Result, WireError};
pub use serial::{ReadSerial, WriteSerial};

// CONSTANTS
// ================================================================================================

/// Width of a `u8`/`i8` on the wire.
pub const N_BYTES_1: usize = 1;
/// Width of a `u16`/`i16` on the wire.
pub const N_BYTES_2: usize = 2;
/// Width of a `u32`/`i32`/`f32` on the wire.
pub const N_BYTES_4: usize = 4;
/// Width of a `u64`/`i64`/`f64` on the wire.
pub const N_BYTES_8: usize = 8;

/// Largest value accepted by [ByteWriter::write_u8].
pub const MAX_U8: u8 = u8::MAX;
/// Largest value accepted by [ByteWriter::write_u16]; also bounds string lengths.
pub const MAX_U16: u16 = u16::MAX;
/// Largest value accepted by [ByteWriter::write_u32].
pub const MAX_U32: u32 = u32::MAX;
/// Largest value accepted by [ByteWriter::write_u64].
pub const MAX_U64: u64 = u64::MAX;

/// Maximum number of UTF-8 bytes a string may occupy, bounded by its `u16` length prefix.
pub const MAX_STR_LEN: usize = MAX_U16 as usize;

/// Byte written ahead of a present optional value.
///
/// Absence is encoded by writing nothing at all, so this byte carries no meaning beyond "a value
/// follows".
pub const OPT_PRESENT_MARKER: u8 = 0;
