//! Erase and clone entity messages.

use crate::error::CodecResult;
use crate::types::EntityId;

/// Encodes as many erase IDs as fit in `capacity` bytes.
///
/// Returns the message and how many IDs it holds; send the rest later.
///
/// # Errors
///
/// Returns [`CodecError::Encode`](crate::CodecError::Encode) if `capacity`
/// cannot hold even the count field.
pub fn encode_erase_entities(ids: &[EntityId], capacity: usize) -> CodecResult<(Vec<u8>, usize)> {
    let raw: Vec<[u8; wire::ENTITY_ID_LEN]> = ids.iter().map(|id| id.to_bytes()).collect();
    Ok(wire::encode_erase_message(&raw, capacity)?)
}

/// Decodes an erase message.
///
/// # Errors
///
/// Returns a wire error for truncated or oversized messages.
pub fn decode_erase_entities(bytes: &[u8], limits: &wire::Limits) -> CodecResult<Vec<EntityId>> {
    let raw = wire::decode_erase_message(bytes, limits)?;
    Ok(raw.into_iter().map(EntityId::from_bytes).collect())
}

/// Encodes a request to clone `source` into a new entity `new_id`.
#[must_use]
pub fn encode_clone_entity(source: EntityId, new_id: EntityId) -> Vec<u8> {
    wire::encode_clone_message(source.to_bytes(), new_id.to_bytes())
}

/// Decodes a clone request into `(source, new_id)`.
///
/// # Errors
///
/// Returns a truncation error if the message is shorter than two IDs.
pub fn decode_clone_entity(bytes: &[u8]) -> CodecResult<(EntityId, EntityId)> {
    let (source, new_id) = wire::decode_clone_message(bytes)?;
    Ok((EntityId::from_bytes(source), EntityId::from_bytes(new_id)))
}
