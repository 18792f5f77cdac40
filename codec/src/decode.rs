//! Edit packet decoding.

use bitstream::BitReader;
use log::{trace, warn};
use schema::{registry, validate_flags, EntityType, Property, PropertyFlags};
use wire::{decode_edit_header, skip_routing_prefix};

use crate::error::CodecResult;
use crate::limits::CodecLimits;
use crate::record::EntityRecord;
use crate::types::EntityId;
use crate::value::PropertyValue;

/// A decoded edit message.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEdit {
    pub id: EntityId,
    /// Record holding the decoded values, each marked changed.
    pub record: EntityRecord,
    /// Properties read from the message.
    pub emitted: PropertyFlags,
    /// Bytes consumed, including the routing prefix.
    pub consumed: usize,
    /// Flagged properties left unread because the type tag was unknown.
    pub skipped: PropertyFlags,
    /// The raw type tag when it named no known type.
    pub unknown_type_tag: Option<u32>,
}

/// Decodes an edit message produced by [`encode_edit`](crate::encode_edit).
///
/// Properties are read in ascending ordinal order. For a known type every
/// flagged property must be legal for it. For an unknown type tag only the
/// common properties are read; decoding stops at the first flagged property
/// outside that set and reports the rest through [`DecodedEdit::skipped`].
///
/// # Errors
///
/// Returns [`CodecError::IllegalProperty`](crate::CodecError::IllegalProperty)
/// for a flagged property the type does not carry, a truncation error if the
/// input ends inside a field, or a limits error if a declared length is too
/// large.
pub fn decode_edit(
    bytes: &[u8],
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> CodecResult<DecodedEdit> {
    wire::check_packet_bytes(bytes, wire_limits)?;
    let mut offset = skip_routing_prefix(bytes)?;
    let (header, used) = decode_edit_header(&bytes[offset..])?;
    offset += used;
    let (flags, used) = PropertyFlags::decode(&bytes[offset..], Property::COUNT)?;
    offset += used;

    let id = EntityId::from_bytes(header.entity_id);
    let (entity_type, unknown_type_tag) = match EntityType::from_tag(header.entity_type) {
        Some(entity_type) => {
            validate_flags(entity_type, &flags)?;
            (entity_type, None)
        }
        None => {
            warn!(
                "edit for {id} has unknown entity type tag {}; reading common properties only",
                header.entity_type
            );
            (EntityType::Unknown, Some(header.entity_type))
        }
    };

    let mut record = EntityRecord::new(entity_type, PropertyFlags::new());
    let mut reader = BitReader::new(&bytes[offset..]);
    let mut emitted = PropertyFlags::new();
    let mut skipped = PropertyFlags::new();
    for property in flags.iter() {
        if !record.holds(property) {
            skipped = flags.difference(&emitted);
            break;
        }
        let value = PropertyValue::decode(registry().def(property), &mut reader, limits)?;
        trace!("{id}: {property} = {value:?}");
        record.set(property, value)?;
        emitted.set(property);
    }
    record.set_last_edited(header.last_edited);

    Ok(DecodedEdit {
        id,
        record,
        emitted,
        consumed: offset + reader.byte_position(),
        skipped,
        unknown_type_tag,
    })
}
