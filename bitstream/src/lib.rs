//! Low-level bit packing primitives for the entity sync codec.
//!
//! This crate provides [`BitWriter`] and [`BitReader`] for bit-level and
//! byte-aligned encoding and decoding, plus byte-count coding, the
//! self-describing variable-length integer format used throughout the wire
//! format.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about entities or properties.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true);
//! writer.write_bits(42, 7).unwrap();
//! writer.write_byte_count(300);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.read_bits(7).unwrap(), 42);
//! assert_eq!(reader.read_byte_count().unwrap(), 300);
//! ```

mod byte_count;
mod error;
mod reader;
mod writer;

pub use byte_count::{byte_count_len, decode_byte_count, encode_byte_count, MAX_BYTE_COUNT_LEN};
pub use error::{BitError, BitResult};
pub use reader::BitReader;
pub use writer::BitWriter;
