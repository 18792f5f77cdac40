//! Bit-level writer for encoding packed binary data.

use crate::byte_count::{bit_width, byte_count_len};
use crate::error::{BitError, BitResult};

/// A bit-level writer for encoding packed binary data.
///
/// Writes are accumulated in an internal buffer. Call [`finish`](Self::finish)
/// to get the final byte buffer. Multi-byte values written through the
/// `*_aligned` methods are little-endian and require a byte boundary.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// The accumulated bytes.
    bytes: Vec<u8>,
    /// Current byte being written (not yet pushed to bytes).
    current_byte: u8,
    /// Number of bits written to `current_byte` (0-7).
    bit_count: u8,
}

impl BitWriter {
    /// Creates a new empty `BitWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `BitWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            current_byte: 0,
            bit_count: 0,
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub fn bits_written(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }

    /// Returns the number of bytes the output will occupy once finished.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.bytes.len() + usize::from(self.bit_count > 0)
    }

    /// Returns `true` if the writer sits on a byte boundary.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.bit_count == 0
    }

    /// Discards everything written so far, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.current_byte = 0;
        self.bit_count = 0;
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, value: bool) {
        self.current_byte = (self.current_byte << 1) | u8::from(value);
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    /// Writes up to 64 bits from an unsigned integer, most significant bit first.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits > 64`.
    /// Returns [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`.
    pub fn write_bits(&mut self, value: u64, bits: u8) -> BitResult<()> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 64 });
        }
        if bits < 64 && value >= (1u64 << bits) {
            return Err(BitError::ValueOutOfRange { value, bits });
        }
        self.push_bits(value, bits);
        Ok(())
    }

    /// Pads with zero bits up to the next byte boundary.
    pub fn align_to_byte(&mut self) {
        while self.bit_count != 0 {
            self.write_bit(false);
        }
    }

    /// Writes a byte-aligned `u8`.
    pub fn write_u8_aligned(&mut self, value: u8) -> BitResult<()> {
        self.ensure_aligned()?;
        self.bytes.push(value);
        Ok(())
    }

    /// Writes a byte-aligned `u16` (little-endian).
    pub fn write_u16_aligned(&mut self, value: u16) -> BitResult<()> {
        self.write_bytes_aligned(&value.to_le_bytes())
    }

    /// Writes a byte-aligned `u32` (little-endian).
    pub fn write_u32_aligned(&mut self, value: u32) -> BitResult<()> {
        self.write_bytes_aligned(&value.to_le_bytes())
    }

    /// Writes a byte-aligned `u64` (little-endian).
    pub fn write_u64_aligned(&mut self, value: u64) -> BitResult<()> {
        self.write_bytes_aligned(&value.to_le_bytes())
    }

    /// Writes a byte-aligned `f32` (little-endian IEEE 754).
    pub fn write_f32_aligned(&mut self, value: f32) -> BitResult<()> {
        self.write_bytes_aligned(&value.to_le_bytes())
    }

    /// Writes raw bytes at a byte boundary.
    pub fn write_bytes_aligned(&mut self, bytes: &[u8]) -> BitResult<()> {
        self.ensure_aligned()?;
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes a unary length prefix: `len - 1` one bits followed by a zero bit.
    ///
    /// A `len` of zero is treated as one.
    pub fn write_length_prefix(&mut self, len: usize) {
        for _ in 1..len {
            self.write_bit(true);
        }
        self.write_bit(false);
    }

    /// Writes `value` with byte-count coding.
    ///
    /// The output is `B` whole bytes: a `B`-bit unary length prefix followed
    /// by the value in `7 * B` bits, most significant bit first.
    pub fn write_byte_count(&mut self, value: u64) {
        let len = byte_count_len(value);
        self.write_length_prefix(len);
        let value_bits = 7 * len;
        if value_bits > 64 {
            for _ in 64..value_bits {
                self.write_bit(false);
            }
            self.push_bits(value, 64);
        } else {
            self.push_bits(value, bit_width(value_bits));
        }
    }

    /// Finishes writing and returns the byte buffer.
    ///
    /// If the last byte is incomplete, it is padded with zeros on the right.
    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        self.flush_partial();
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    ///
    /// If the last byte is incomplete, it is padded with zeros on the right.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        self.flush_partial();
        buf.append(&mut self.bytes);
    }

    /// Returns the completed bytes written so far without consuming the writer.
    ///
    /// Any partial trailing byte is not included; align first if needed.
    #[must_use]
    pub fn as_aligned_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn push_bits(&mut self, value: u64, bits: u8) {
        for i in (0..bits).rev() {
            self.write_bit((value >> i) & 1 == 1);
        }
    }

    fn flush_partial(&mut self) {
        if self.bit_count > 0 {
            self.current_byte <<= 8 - self.bit_count;
            self.bytes.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    fn ensure_aligned(&self) -> BitResult<()> {
        if self.bit_count != 0 {
            return Err(BitError::MisalignedAccess {
                bit_position: self.bits_written(),
            });
        }
        Ok(())
    }
}
