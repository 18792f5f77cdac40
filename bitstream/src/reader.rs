//! Bit-level reader with bounded operations.

use crate::byte_count::{bit_width, MAX_BYTE_COUNT_LEN};
use crate::error::{BitError, BitResult};

/// A bit-level reader for decoding packed binary data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new `BitReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub const fn bits_remaining(&self) -> usize {
        self.data
            .len()
            .saturating_mul(8)
            .saturating_sub(self.bit_pos)
    }

    /// Returns the number of whole bytes remaining after the current position.
    #[must_use]
    pub const fn bytes_remaining(&self) -> usize {
        self.bits_remaining() / 8
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Returns the current position in bytes, rounded up to a whole byte.
    #[must_use]
    pub const fn byte_position(&self) -> usize {
        self.bit_pos.div_ceil(8)
    }

    /// Reads a single bit as a boolean.
    pub fn read_bit(&mut self) -> BitResult<bool> {
        self.ensure_bits(1)?;
        let byte_idx = self.bit_pos / 8;
        let bit_idx = self.bit_pos % 8;
        let bit = (self.data[byte_idx] >> (7 - bit_idx)) & 1;
        self.bit_pos += 1;
        Ok(bit == 1)
    }

    /// Reads up to 64 bits as an unsigned integer, most significant bit first.
    pub fn read_bits(&mut self, bits: u8) -> BitResult<u64> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 64 });
        }
        if bits == 0 {
            return Ok(0);
        }
        self.ensure_bits(bits as usize)?;

        let mut value = 0u64;
        for _ in 0..bits {
            value = (value << 1) | u64::from(self.read_bit()?);
        }
        Ok(value)
    }

    /// Aligns to the next byte boundary.
    pub fn align_to_byte(&mut self) -> BitResult<()> {
        let rem = self.bit_pos % 8;
        if rem == 0 {
            return Ok(());
        }
        let skip = 8 - rem;
        self.ensure_bits(skip)?;
        self.bit_pos += skip;
        Ok(())
    }

    /// Reads a byte-aligned `u8`.
    pub fn read_u8_aligned(&mut self) -> BitResult<u8> {
        let [value] = self.read_aligned_array::<1>()?;
        Ok(value)
    }

    /// Reads a byte-aligned `u16` (little-endian).
    pub fn read_u16_aligned(&mut self) -> BitResult<u16> {
        Ok(u16::from_le_bytes(self.read_aligned_array::<2>()?))
    }

    /// Reads a byte-aligned `u32` (little-endian).
    pub fn read_u32_aligned(&mut self) -> BitResult<u32> {
        Ok(u32::from_le_bytes(self.read_aligned_array::<4>()?))
    }

    /// Reads a byte-aligned `u64` (little-endian).
    pub fn read_u64_aligned(&mut self) -> BitResult<u64> {
        Ok(u64::from_le_bytes(self.read_aligned_array::<8>()?))
    }

    /// Reads a byte-aligned `f32` (little-endian IEEE 754).
    pub fn read_f32_aligned(&mut self) -> BitResult<f32> {
        Ok(f32::from_le_bytes(self.read_aligned_array::<4>()?))
    }

    /// Reads a fixed-size byte array at a byte boundary.
    pub fn read_aligned_array<const N: usize>(&mut self) -> BitResult<[u8; N]> {
        let slice = self.read_bytes_aligned(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Reads `len` raw bytes at a byte boundary, borrowing from the input.
    pub fn read_bytes_aligned(&mut self, len: usize) -> BitResult<&'a [u8]> {
        self.ensure_aligned()?;
        self.ensure_bits(len.saturating_mul(8))?;
        let idx = self.bit_pos / 8;
        let slice = &self.data[idx..idx + len];
        self.bit_pos += len * 8;
        Ok(slice)
    }

    /// Reads a unary length prefix written by
    /// [`BitWriter::write_length_prefix`](crate::BitWriter::write_length_prefix).
    ///
    /// Returns the byte count `B` (one more than the number of leading ones).
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidLengthPrefix`] if the prefix claims more than
    /// `max_bytes`, or [`BitError::UnexpectedEof`] if input ends inside it.
    pub fn read_length_prefix(&mut self, max_bytes: usize) -> BitResult<usize> {
        let mut len = 1usize;
        while self.read_bit()? {
            len += 1;
            if len > max_bytes {
                return Err(BitError::InvalidLengthPrefix {
                    claimed: len,
                    max_bytes,
                });
            }
        }
        Ok(len)
    }

    /// Reads a byte-count coded value.
    ///
    /// The full encoded length is checked against the remaining input before
    /// any value bits are consumed.
    pub fn read_byte_count(&mut self) -> BitResult<u64> {
        let start = self.bit_pos;
        let len = self.read_length_prefix(MAX_BYTE_COUNT_LEN)?;
        let total_bits = len * 8;
        let available = self.data.len().saturating_mul(8).saturating_sub(start);
        if total_bits > available {
            return Err(BitError::UnexpectedEof {
                requested: total_bits,
                available,
            });
        }
        let value_bits = 7 * len;
        if value_bits > 64 {
            // Only the low 64 of the value bits may be non-zero.
            let high = self.read_bits(bit_width(value_bits - 64))?;
            if high != 0 {
                return Err(BitError::ByteCountOverflow { bytes: len });
            }
            return self.read_bits(64);
        }
        self.read_bits(bit_width(value_bits))
    }

    fn ensure_aligned(&self) -> BitResult<()> {
        if self.bit_pos % 8 != 0 {
            return Err(BitError::MisalignedAccess {
                bit_position: self.bit_pos,
            });
        }
        Ok(())
    }

    fn ensure_bits(&self, bits: usize) -> BitResult<()> {
        let available = self.bits_remaining();
        if bits > available {
            return Err(BitError::UnexpectedEof {
                requested: bits,
                available,
            });
        }
        Ok(())
    }
}
