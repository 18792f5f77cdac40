//! Edit packet encoding under a fixed byte budget.

use log::{debug, trace};
use schema::PropertyFlags;
use wire::{EditHeader, PacketBuilder, PatchRegion, ROUTING_PREFIX_STUB};

use crate::error::CodecResult;
use crate::record::EntityRecord;
use crate::scratch::CodecScratch;
use crate::types::EntityId;

/// Where an encode ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeState {
    Start,
    HeaderWritten,
    /// Properties appended so far.
    PropertiesWritten(usize),
    /// At least one property was written and the flag set is final.
    Finalized,
    /// Nothing was encoded.
    Overflowed,
}

/// Result of encoding one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOutcome {
    /// The finished message; empty when nothing was encoded.
    pub bytes: Vec<u8>,
    /// Properties present in `bytes`.
    pub emitted: PropertyFlags,
    /// Requested properties that did not fit. Retry them in a later message.
    pub didnt_fit: PropertyFlags,
    pub state: EncodeState,
}

impl EncodeOutcome {
    fn overflowed(didnt_fit: PropertyFlags) -> Self {
        Self {
            bytes: Vec::new(),
            emitted: PropertyFlags::new(),
            didnt_fit,
            state: EncodeState::Overflowed,
        }
    }

    /// Returns `true` if nothing was encoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if every requested property was sent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == EncodeState::Finalized && self.didnt_fit.is_empty()
    }
}

/// Encodes the `requested` properties of `record` into at most `capacity`
/// bytes.
///
/// See [`encode_edit_with_scratch`].
///
/// # Errors
///
/// Returns an error only if a value cannot be encoded at all.
pub fn encode_edit(
    id: EntityId,
    record: &EntityRecord,
    requested: &PropertyFlags,
    capacity: usize,
) -> CodecResult<EncodeOutcome> {
    let mut scratch = CodecScratch::new();
    encode_edit_with_scratch(id, record, requested, capacity, &mut scratch)
}

/// Encodes an edit message using caller-provided scratch buffers.
///
/// Properties are tried in ascending ordinal order. Requested properties the
/// record's type does not carry are dropped silently. The first property that
/// does not fit ends the walk; it and every later requested property are
/// reported in [`EncodeOutcome::didnt_fit`]. The flag set written up front
/// covers everything requested and is patched down to what was emitted.
///
/// # Errors
///
/// Returns an error only if a value cannot be encoded at all.
pub fn encode_edit_with_scratch(
    id: EntityId,
    record: &EntityRecord,
    requested: &PropertyFlags,
    capacity: usize,
    scratch: &mut CodecScratch,
) -> CodecResult<EncodeOutcome> {
    let wanted = requested.intersection(&record.legal_properties());
    let entity_type = record.entity_type();
    let mut builder = PacketBuilder::new(capacity);

    let header = EditHeader::new(record.last_edited(), id.to_bytes(), entity_type.tag());
    let Some(flags_region) = write_header(&mut builder, &header, &wanted) else {
        debug!("edit for {id} overflowed at the header ({capacity} byte budget)");
        return Ok(EncodeOutcome::overflowed(wanted));
    };
    let mut state = EncodeState::HeaderWritten;

    let mut emitted = PropertyFlags::new();
    let mut didnt_fit = PropertyFlags::new();
    let mut written = 0usize;
    for property in wanted.iter() {
        if !didnt_fit.is_empty() {
            didnt_fit.set(property);
            continue;
        }
        let Some(value) = record.get(property) else {
            continue;
        };
        value.encode(scratch.value_writer())?;
        if builder.append(scratch.value_bytes()).is_ok() {
            emitted.set(property);
            written += 1;
            state = EncodeState::PropertiesWritten(written);
            trace!("{id}: {property} ({} bytes)", scratch.value_bytes().len());
        } else {
            didnt_fit.set(property);
        }
    }

    if written == 0 {
        debug!("edit for {id} discarded: no property fit ({state:?})");
        return Ok(EncodeOutcome::overflowed(didnt_fit));
    }

    let shrink = builder.patch(flags_region, &emitted.encode())?;
    if !didnt_fit.is_empty() {
        debug!(
            "edit for {id}: {} properties did not fit, flag set shrank by {shrink} bytes",
            didnt_fit.len()
        );
    }

    Ok(EncodeOutcome {
        bytes: builder.finish(),
        emitted,
        didnt_fit,
        state: EncodeState::Finalized,
    })
}

fn write_header(
    builder: &mut PacketBuilder,
    header: &EditHeader,
    wanted: &PropertyFlags,
) -> Option<PatchRegion> {
    builder.append(&ROUTING_PREFIX_STUB).ok()?;
    builder.append(&header.encode()).ok()?;
    builder.reserve_patch(&wanted.encode()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Color;
    use schema::{EntityType, Property};

    fn light() -> EntityRecord {
        let mut record = EntityRecord::new(EntityType::Light, PropertyFlags::new());
        record.set_color(Color::new(10, 20, 30));
        record.set_intensity(4.0);
        record.set_falloff_radius(2.0);
        record
    }

    fn flags(properties: &[Property]) -> PropertyFlags {
        properties.iter().copied().collect()
    }

    #[test]
    fn roomy_buffer_emits_everything() {
        let requested = flags(&[Property::Color, Property::Intensity, Property::FalloffRadius]);
        let outcome = encode_edit(EntityId::random(), &light(), &requested, 1492).unwrap();
        assert_eq!(outcome.state, EncodeState::Finalized);
        assert_eq!(outcome.emitted, requested);
        assert!(outcome.didnt_fit.is_empty());
        assert!(outcome.is_complete());
    }

    #[test]
    fn tight_buffer_reports_didnt_fit() {
        // prefix 1 + header 26 + flags 18 = 45, color 3 fits, intensity 4 does not.
        let requested = flags(&[Property::Color, Property::Intensity, Property::FalloffRadius]);
        let outcome = encode_edit(EntityId::random(), &light(), &requested, 50).unwrap();
        assert_eq!(outcome.state, EncodeState::Finalized);
        assert_eq!(outcome.emitted, flags(&[Property::Color]));
        assert_eq!(
            outcome.didnt_fit,
            flags(&[Property::Intensity, Property::FalloffRadius])
        );
        // The flag set shrinks from 18 bytes to 3.
        assert_eq!(outcome.bytes.len(), 1 + 26 + 3 + 3);
    }

    #[test]
    fn header_overflow_reports_everything() {
        let requested = flags(&[Property::Color, Property::Intensity]);
        let outcome = encode_edit(EntityId::random(), &light(), &requested, 10).unwrap();
        assert_eq!(outcome.state, EncodeState::Overflowed);
        assert!(outcome.is_empty());
        assert!(outcome.emitted.is_empty());
        assert_eq!(outcome.didnt_fit, requested);
    }

    #[test]
    fn illegal_requests_are_dropped_silently() {
        let requested = flags(&[Property::Intensity, Property::Text]);
        let outcome = encode_edit(EntityId::random(), &light(), &requested, 1492).unwrap();
        assert_eq!(outcome.emitted, flags(&[Property::Intensity]));
        assert!(outcome.didnt_fit.is_empty());
    }

    #[test]
    fn empty_request_encodes_nothing() {
        let outcome =
            encode_edit(EntityId::random(), &light(), &PropertyFlags::new(), 1492).unwrap();
        assert_eq!(outcome.state, EncodeState::Overflowed);
        assert!(outcome.is_empty());
        assert!(outcome.didnt_fit.is_empty());
    }

    #[test]
    fn no_property_fits() {
        let mut record = EntityRecord::new(EntityType::Text, PropertyFlags::new());
        record.set_text("x".repeat(200));
        let requested = flags(&[Property::Text]);
        let outcome = encode_edit(EntityId::random(), &record, &requested, 100).unwrap();
        assert_eq!(outcome.state, EncodeState::Overflowed);
        assert!(outcome.is_empty());
        assert_eq!(outcome.didnt_fit, requested);
    }

    #[test]
    fn header_carries_visible_type() {
        let record = EntityRecord::new(EntityType::Box, PropertyFlags::new());
        let requested = flags(&[Property::Shape]);
        let outcome = encode_edit(EntityId::nil(), &record, &requested, 1492).unwrap();
        let (header, _) = wire::decode_edit_header(&outcome.bytes[1..]).unwrap();
        assert_eq!(header.entity_type, EntityType::Box.tag());
    }

    #[test]
    fn scratch_reuse_matches_fresh() {
        let record = light();
        let requested = record.legal_properties();
        let id = EntityId::from_bytes([3; 16]);
        let mut scratch = CodecScratch::with_capacity(64);
        let first = encode_edit_with_scratch(id, &record, &requested, 1492, &mut scratch).unwrap();
        let second = encode_edit_with_scratch(id, &record, &requested, 1492, &mut scratch).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, encode_edit(id, &record, &requested, 1492).unwrap());
    }
}
