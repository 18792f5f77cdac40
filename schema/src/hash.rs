//! Deterministic schema fingerprint.

use blake3::Hasher;

use crate::dispatch::legal_properties;
use crate::entity_type::EntityType;
use crate::group::GroupKind;
use crate::table::{PropertyDef, PROPERTIES};

/// Computes a fingerprint of the property table and per-type legal sets.
///
/// Peers can compare fingerprints to detect table drift before exchanging
/// edit messages.
#[must_use]
pub fn schema_hash() -> u64 {
    hash_table(&PROPERTIES, &EntityType::ALL)
}

fn hash_table(defs: &[PropertyDef], types: &[EntityType]) -> u64 {
    let mut hasher = Hasher::new();
    write_u32(&mut hasher, defs.len() as u32);

    for def in defs {
        write_u16(&mut hasher, def.ordinal());
        hasher.update(def.name.as_bytes());
        write_u8(&mut hasher, 0);
        write_u8(&mut hasher, def.kind.tag());
        match def.range {
            Some(range) => {
                write_u8(&mut hasher, 1);
                write_f64(&mut hasher, range.min);
                write_f64(&mut hasher, range.max);
            }
            None => write_u8(&mut hasher, 0),
        }
        write_u32(&mut hasher, def.max_len.map_or(0, |len| len as u32 + 1));
        write_u8(&mut hasher, def.group.map_or(0, group_tag));
    }

    write_u32(&mut hasher, types.len() as u32);
    for &entity_type in types {
        write_u32(&mut hasher, entity_type.tag());
        let legal = legal_properties(entity_type);
        write_u32(&mut hasher, legal.len() as u32);
        for property in legal.iter() {
            write_u16(&mut hasher, property.ordinal());
        }
    }

    let hash = hasher.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

fn group_tag(group: GroupKind) -> u8 {
    GroupKind::ALL
        .iter()
        .position(|&candidate| candidate == group)
        .map_or(0, |index| index as u8 + 1)
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u16(hasher: &mut Hasher, value: u16) {
    hasher.update(&value.to_le_bytes());
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}

fn write_f64(hasher: &mut Hasher, value: f64) {
    hasher.update(&value.to_bits().to_le_bytes());
}
