//! Introspection and debugging tools for the entity sync codec.
//!
//! This crate provides utilities for inspecting and understanding edit
//! messages:
//!
//! - Break a message down into prefix, header, flag set and per-property sizes
//! - Decode a message into structured JSON
//! - List the property table, optionally filtered by entity type
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use std::fmt::Write as _;

use codec::{decode_edit, to_json_object, CodecLimits, CodecResult, EntityId};
use schema::{registry, EntityType, GroupKind, Property, PropertyFlags, ValueKind};
use serde::Serialize;
use wire::{decode_edit_header, skip_routing_prefix, EditHeader};

/// Size breakdown of one edit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub total_len: usize,
    pub prefix_len: usize,
    pub header: EditHeader,
    pub header_len: usize,
    /// `None` when the header's type tag is unknown to this build.
    pub entity_type: Option<EntityType>,
    pub flags_len: usize,
    pub properties: Vec<PropertySize>,
    /// Flagged properties that could not be read for an unknown type.
    pub skipped: Vec<Property>,
    /// Bytes after the last decoded value.
    pub trailing: usize,
}

/// Encoded size of one property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySize {
    pub property: Property,
    pub byte_len: usize,
}

impl InspectReport {
    /// Sum of all property value bytes.
    #[must_use]
    pub fn payload_len(&self) -> usize {
        self.properties.iter().map(|entry| entry.byte_len).sum()
    }
}

/// Breaks an edit message down by section.
///
/// # Errors
///
/// Returns the decoder's error if the message is malformed.
pub fn inspect_packet(
    bytes: &[u8],
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> CodecResult<InspectReport> {
    let decoded = decode_edit(bytes, wire_limits, limits)?;
    let prefix_len = skip_routing_prefix(bytes)?;
    let (header, header_len) = decode_edit_header(&bytes[prefix_len..])?;
    let (_, flags_len) =
        PropertyFlags::decode(&bytes[prefix_len + header_len..], Property::COUNT)?;

    let properties = decoded
        .emitted
        .iter()
        .filter_map(|property| {
            decoded.record.get(property).map(|value| PropertySize {
                property,
                byte_len: value.encoded_len(),
            })
        })
        .collect();

    Ok(InspectReport {
        total_len: bytes.len(),
        prefix_len,
        header,
        header_len,
        entity_type: EntityType::from_tag(header.entity_type),
        flags_len,
        properties,
        skipped: decoded.skipped.iter().collect(),
        trailing: bytes.len() - decoded.consumed,
    })
}

/// A decoded edit message in serializable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedPacket {
    pub entity_id: String,
    pub entity_type: EntityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_type_tag: Option<u32>,
    pub last_edited: u64,
    /// Decoded values keyed the way [`codec::to_json_object`] keys them.
    pub properties: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<&'static str>,
}

/// Decodes an edit message into a [`DecodedPacket`].
///
/// # Errors
///
/// Returns the decoder's error if the message is malformed.
pub fn decode_packet_json(
    bytes: &[u8],
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> CodecResult<DecodedPacket> {
    let decoded = decode_edit(bytes, wire_limits, limits)?;
    let mut record = decoded.record;
    let properties = if decoded.emitted.is_empty() {
        serde_json::json!({ "type": record.entity_type().name() })
    } else {
        record.set_desired_properties(decoded.emitted);
        to_json_object(&record, false)
    };
    Ok(DecodedPacket {
        entity_id: entity_id_string(decoded.id),
        entity_type: record.entity_type(),
        unknown_type_tag: decoded.unknown_type_tag,
        last_edited: record.last_edited(),
        properties,
        skipped: registry().names(&decoded.skipped),
    })
}

fn entity_id_string(id: EntityId) -> String {
    id.raw().hyphenated().to_string()
}

/// Renders a [`DecodedPacket`] as indented text.
#[must_use]
pub fn format_decode_pretty(packet: &DecodedPacket) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "entity: {} ({})", packet.entity_id, packet.entity_type);
    if let Some(tag) = packet.unknown_type_tag {
        let _ = writeln!(out, "unknown type tag: {tag}");
    }
    let _ = writeln!(out, "last edited: {}", packet.last_edited);
    let _ = writeln!(out, "properties:");
    if let Some(object) = packet.properties.as_object() {
        for (key, value) in object.iter().filter(|(key, _)| key.as_str() != "type") {
            match value.as_object() {
                Some(members) if GroupKind::from_name(key).is_some() => {
                    let _ = writeln!(out, "  {key}:");
                    for (member, value) in members {
                        let _ = writeln!(out, "    {member}: {value}");
                    }
                }
                _ => {
                    let _ = writeln!(out, "  {key}: {value}");
                }
            }
        }
    }
    if !packet.skipped.is_empty() {
        let _ = writeln!(out, "skipped: {}", packet.skipped.join(", "));
    }
    out
}

/// One row of the property table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyInfo {
    pub ordinal: u16,
    pub name: &'static str,
    pub kind: ValueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
}

/// Lists the property table, restricted to `entity_type` when given.
#[must_use]
pub fn list_properties(entity_type: Option<EntityType>) -> Vec<PropertyInfo> {
    let legal = entity_type.map_or_else(PropertyFlags::all, |entity_type| {
        registry().legal_for(entity_type.base_type())
    });
    registry()
        .iter()
        .filter(|def| legal.test(def.property))
        .map(|def| PropertyInfo {
            ordinal: def.ordinal(),
            name: def.name,
            kind: def.kind,
            group: def.group,
            range: def.range.map(|range| (range.min, range.max)),
            max_len: def.max_len,
        })
        .collect()
}
