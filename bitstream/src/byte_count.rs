//! Byte-count coding: self-describing variable-length unsigned integers.
//!
//! A value occupies `B` bytes. The first `B - 1` bits are ones, the next bit
//! is zero, and the remaining `7 * B` bits hold the value most significant
//! bit first. The length is recoverable from the leading bits alone.

use crate::error::BitResult;
use crate::reader::BitReader;
use crate::writer::BitWriter;

/// Maximum encoded length of a byte-count coded `u64`.
pub const MAX_BYTE_COUNT_LEN: usize = 10;

/// Returns the number of bytes `value` occupies when byte-count coded.
#[must_use]
pub const fn byte_count_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()) as usize;
    if bits == 0 {
        1
    } else {
        bits.div_ceil(7)
    }
}

/// Encodes `value` with byte-count coding.
#[must_use]
pub fn encode_byte_count(value: u64) -> Vec<u8> {
    let mut writer = BitWriter::with_capacity(byte_count_len(value));
    writer.write_byte_count(value);
    writer.finish()
}

/// Decodes a byte-count coded value from the start of `bytes`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`BitError::UnexpectedEof`](crate::BitError::UnexpectedEof) if
/// fewer bytes remain than the prefix claims.
pub fn decode_byte_count(bytes: &[u8]) -> BitResult<(u64, usize)> {
    let mut reader = BitReader::new(bytes);
    let value = reader.read_byte_count()?;
    Ok((value, reader.byte_position()))
}

/// Narrows a bit count to the `u8` taken by the bit-level read/write calls.
///
/// Counts above 255 saturate, which the callers reject as invalid.
pub(crate) fn bit_width(bits: usize) -> u8 {
    u8::try_from(bits).unwrap_or(u8::MAX)
}
