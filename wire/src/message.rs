//! Entity erase and clone messages.
//!
//! Erase: `u32` count (little-endian) followed by that many 16-byte IDs.
//! Clone: the source ID followed by the new ID.

use bitstream::BitReader;

use crate::error::{DecodeError, EncodeError, LimitKind, WireResult};
use crate::header::ENTITY_ID_LEN;
use crate::limits::Limits;

const ERASE_COUNT_LEN: usize = 4;

/// Encoded size of a clone message.
pub const CLONE_MESSAGE_LEN: usize = 2 * ENTITY_ID_LEN;

/// Encodes as many IDs as fit in `capacity` bytes.
///
/// Returns the message and the number of IDs written; the caller sends the
/// remainder in a later message.
///
/// # Errors
///
/// Returns [`EncodeError::BufferTooSmall`] if `capacity` cannot hold the
/// count field, or [`EncodeError::LengthOverflow`] if more IDs fit than a
/// `u32` count can express.
pub fn encode_erase_message(
    ids: &[[u8; ENTITY_ID_LEN]],
    capacity: usize,
) -> Result<(Vec<u8>, usize), EncodeError> {
    if capacity < ERASE_COUNT_LEN {
        return Err(EncodeError::BufferTooSmall {
            needed: ERASE_COUNT_LEN,
            available: capacity,
        });
    }
    let room = (capacity - ERASE_COUNT_LEN) / ENTITY_ID_LEN;
    let written = ids.len().min(room);
    let count = u32::try_from(written).map_err(|_| EncodeError::LengthOverflow { length: written })?;

    let mut out = Vec::with_capacity(ERASE_COUNT_LEN + written * ENTITY_ID_LEN);
    out.extend_from_slice(&count.to_le_bytes());
    for id in &ids[..written] {
        out.extend_from_slice(id);
    }
    Ok((out, written))
}

/// Decodes an erase message.
///
/// # Errors
///
/// Returns [`DecodeError::LimitsExceeded`] if the count exceeds
/// `limits.max_erase_ids` or the message exceeds `limits.max_packet_bytes`,
/// and [`DecodeError::Truncated`] if fewer IDs are present than declared.
pub fn decode_erase_message(buf: &[u8], limits: &Limits) -> WireResult<Vec<[u8; ENTITY_ID_LEN]>> {
    check_packet_len(buf, limits)?;
    let mut reader = BitReader::new(buf);
    let count = reader.read_u32_aligned()? as usize;
    if count > limits.max_erase_ids {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::EraseIds,
            limit: limits.max_erase_ids,
            actual: count,
        });
    }
    let needed = count.saturating_mul(ENTITY_ID_LEN);
    if needed > reader.bytes_remaining() {
        return Err(DecodeError::Truncated {
            needed,
            available: reader.bytes_remaining(),
        });
    }
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(reader.read_aligned_array::<ENTITY_ID_LEN>()?);
    }
    Ok(ids)
}

/// Encodes a clone request: copy `source` into a new entity `new_id`.
#[must_use]
pub fn encode_clone_message(source: [u8; ENTITY_ID_LEN], new_id: [u8; ENTITY_ID_LEN]) -> Vec<u8> {
    let mut out = Vec::with_capacity(CLONE_MESSAGE_LEN);
    out.extend_from_slice(&source);
    out.extend_from_slice(&new_id);
    out
}

/// Decodes a clone request into `(source, new_id)`.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if fewer than 32 bytes are present.
pub fn decode_clone_message(
    buf: &[u8],
) -> WireResult<([u8; ENTITY_ID_LEN], [u8; ENTITY_ID_LEN])> {
    if buf.len() < CLONE_MESSAGE_LEN {
        return Err(DecodeError::Truncated {
            needed: CLONE_MESSAGE_LEN,
            available: buf.len(),
        });
    }
    let mut reader = BitReader::new(buf);
    let source = reader.read_aligned_array::<ENTITY_ID_LEN>()?;
    let new_id = reader.read_aligned_array::<ENTITY_ID_LEN>()?;
    Ok((source, new_id))
}

pub(crate) fn check_packet_len(buf: &[u8], limits: &Limits) -> WireResult<()> {
    if buf.len() > limits.max_packet_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::PacketBytes,
            limit: limits.max_packet_bytes,
            actual: buf.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u8) -> Vec<[u8; ENTITY_ID_LEN]> {
        (0..n).map(|i| [i; ENTITY_ID_LEN]).collect()
    }

    #[test]
    fn erase_packs_until_full() {
        let all = ids(5);
        // room for the count plus three IDs and change
        let (bytes, written) = encode_erase_message(&all, 4 + 3 * 16 + 10).unwrap();
        assert_eq!(written, 3);
        assert_eq!(bytes.len(), 4 + 3 * 16);
        assert_eq!(&bytes[..4], &3u32.to_le_bytes());

        let decoded = decode_erase_message(&bytes, &Limits::default()).unwrap();
        assert_eq!(decoded, all[..3].to_vec());
    }

    #[test]
    fn erase_writes_everything_when_room() {
        let all = ids(2);
        let (bytes, written) = encode_erase_message(&all, 1492).unwrap();
        assert_eq!(written, 2);
        assert_eq!(decode_erase_message(&bytes, &Limits::default()).unwrap(), all);
    }

    #[test]
    fn erase_needs_room_for_count() {
        assert!(matches!(
            encode_erase_message(&ids(1), 3),
            Err(EncodeError::BufferTooSmall { .. })
        ));
    }

    #[test]
    fn erase_empty_list() {
        let (bytes, written) = encode_erase_message(&[], 64).unwrap();
        assert_eq!(written, 0);
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        assert!(decode_erase_message(&bytes, &Limits::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn erase_count_over_limit() {
        let (bytes, _) = encode_erase_message(&ids(9), 1492).unwrap();
        let err = decode_erase_message(&bytes, &Limits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::LimitsExceeded {
                kind: LimitKind::EraseIds,
                limit: 8,
                actual: 9
            }
        );
    }

    #[test]
    fn erase_declared_count_exceeds_payload() {
        let mut bytes = 4u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0; 20]);
        let err = decode_erase_message(&bytes, &Limits::default()).unwrap_err();
        assert!(err.is_truncation());
    }

    #[test]
    fn clone_roundtrip() {
        let bytes = encode_clone_message([1; 16], [2; 16]);
        assert_eq!(bytes.len(), CLONE_MESSAGE_LEN);
        assert_eq!(decode_clone_message(&bytes).unwrap(), ([1; 16], [2; 16]));
    }

    #[test]
    fn clone_truncated() {
        let bytes = encode_clone_message([1; 16], [2; 16]);
        assert!(decode_clone_message(&bytes[..31]).unwrap_err().is_truncation());
    }
}
