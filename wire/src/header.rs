//! Edit message header.
//!
//! Layout after the routing prefix:
//!
//! | Field          | Encoding                 |
//! |----------------|--------------------------|
//! | `last_edited`  | u64 little-endian        |
//! | `entity_id`    | 16 bytes                 |
//! | `entity_type`  | byte-count coded         |
//! | `update_delta` | byte-count coded, zero   |
//!
//! The property flag set that follows belongs to the schema layer.

use bitstream::{byte_count_len, encode_byte_count, BitReader};

use crate::error::{DecodeError, WireResult};

/// Size of an encoded entity ID.
pub const ENTITY_ID_LEN: usize = 16;

/// Fixed-width portion of the header (timestamp plus ID).
pub const EDIT_HEADER_FIXED_LEN: usize = 8 + ENTITY_ID_LEN;

/// Header of one entity edit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditHeader {
    /// Last-edited timestamp in microseconds.
    pub last_edited: u64,
    /// Entity ID in RFC 4122 byte order.
    pub entity_id: [u8; ENTITY_ID_LEN],
    /// Entity type wire tag.
    pub entity_type: u32,
    /// Time since the last update. Always zero for edit messages.
    pub update_delta: u64,
}

impl EditHeader {
    /// Creates an edit header with a zero update delta.
    #[must_use]
    pub const fn new(last_edited: u64, entity_id: [u8; ENTITY_ID_LEN], entity_type: u32) -> Self {
        Self {
            last_edited,
            entity_id,
            entity_type,
            update_delta: 0,
        }
    }

    /// Returns the number of bytes [`encode`](Self::encode) produces.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        EDIT_HEADER_FIXED_LEN
            + byte_count_len(self.entity_type as u64)
            + byte_count_len(self.update_delta)
    }

    /// Encodes the header into a new buffer.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.last_edited.to_le_bytes());
        out.extend_from_slice(&self.entity_id);
        out.extend_from_slice(&encode_byte_count(u64::from(self.entity_type)));
        out.extend_from_slice(&encode_byte_count(self.update_delta));
        out
    }
}

/// Decodes an edit header, returning it and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if the buffer ends inside the header,
/// or [`DecodeError::Bitstream`] if a byte-count field is malformed or the
/// entity type tag does not fit in `u32`.
pub fn decode_edit_header(buf: &[u8]) -> WireResult<(EditHeader, usize)> {
    let mut reader = BitReader::new(buf);
    let last_edited = reader.read_u64_aligned()?;
    let entity_id = reader.read_aligned_array::<ENTITY_ID_LEN>()?;
    let raw_type = reader.read_byte_count()?;
    let entity_type = u32::try_from(raw_type).map_err(|_| {
        DecodeError::Bitstream(bitstream::BitError::ValueOutOfRange {
            value: raw_type,
            bits: 32,
        })
    })?;
    let update_delta = reader.read_byte_count()?;
    let header = EditHeader {
        last_edited,
        entity_id,
        entity_type,
        update_delta,
    };
    Ok((header, reader.byte_position()))
}
