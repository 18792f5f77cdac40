//! Key/value (JSON) marshalling of entity records.
//!
//! Objects are keyed by registry name. Group members nest under their group
//! name, so `haze.hazeRange` becomes `{"haze": {"hazeRange": ..}}`. Blobs are
//! base64 strings and zone component modes are `"inherit"`, `"disabled"` or
//! `"enabled"`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use glam::{Quat, Vec2, Vec3, Vec4};
use schema::{registry, ComponentMode, GroupKind, Property, PropertyFlags, ValueKind};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::defaults::is_default;
use crate::error::{CodecError, CodecResult};
use crate::record::EntityRecord;
use crate::value::{AaCube, Color, PropertyValue};

/// Converts `record` into a JSON object.
///
/// Only the record's desired properties are included (all when the mask is
/// empty). With `skip_defaults`, properties at their default are left out.
/// The visible entity type is always present under `"type"`.
#[must_use]
pub fn to_json_object(record: &EntityRecord, skip_defaults: bool) -> Value {
    let desired = record.desired_properties();
    let mut root = Map::new();
    root.insert("type".into(), Value::from(record.entity_type().name()));
    for (property, value) in record.iter() {
        if !desired.is_empty() && !desired.test(property) {
            continue;
        }
        if skip_defaults && is_default(property, value) {
            continue;
        }
        let name = registry().def(property).name;
        match name.split_once('.') {
            Some((group, key)) => {
                let nested = root
                    .entry(group)
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(members) = nested {
                    members.insert(key.into(), property_to_json(property, value));
                }
            }
            None => {
                root.insert(name.into(), property_to_json(property, value));
            }
        }
    }
    Value::Object(root)
}

/// Assigns every recognised key of `object` through the record's setter.
///
/// Unknown keys are ignored. Returns the properties actually assigned.
///
/// # Errors
///
/// Returns [`CodecError::JsonType`] if a recognised key holds a value that
/// cannot be read as the property's kind.
pub fn apply_json_object(record: &mut EntityRecord, object: &Value) -> CodecResult<PropertyFlags> {
    let mut assigned = PropertyFlags::new();
    let Some(object) = object.as_object() else {
        return Ok(assigned);
    };
    for (key, value) in object {
        match (GroupKind::from_name(key), value.as_object()) {
            (Some(_), Some(members)) => {
                for (member, value) in members {
                    apply_one(record, &format!("{key}.{member}"), value, &mut assigned)?;
                }
            }
            _ => apply_one(record, key, value, &mut assigned)?,
        }
    }
    Ok(assigned)
}

fn apply_one(
    record: &mut EntityRecord,
    name: &str,
    value: &Value,
    assigned: &mut PropertyFlags,
) -> CodecResult<()> {
    let Some(def) = registry().lookup(name) else {
        return Ok(());
    };
    let parsed =
        property_from_json(def.property, def.kind, value).ok_or_else(|| CodecError::JsonType {
            name: name.to_owned(),
            expected: def.kind,
        })?;
    if record.set(def.property, parsed)? {
        assigned.set(def.property);
    }
    Ok(())
}

fn property_to_json(property: Property, value: &PropertyValue) -> Value {
    match (GroupKind::with_mode_property(property), value) {
        (Some(_), PropertyValue::U8(raw)) => Value::from(ComponentMode::from_raw(*raw).name()),
        _ => value_to_json(value),
    }
}

// Mode properties take a mode name; numbers are still accepted.
fn property_from_json(
    property: Property,
    kind: ValueKind,
    value: &Value,
) -> Option<PropertyValue> {
    match (GroupKind::with_mode_property(property), value.as_str()) {
        (Some(_), Some(name)) => {
            ComponentMode::from_name(name).map(|mode| PropertyValue::U8(mode.raw()))
        }
        _ => value_from_json(kind, value),
    }
}

/// Converts a value into its JSON form.
#[must_use]
pub fn value_to_json(value: &PropertyValue) -> Value {
    match value {
        PropertyValue::Bool(v) => Value::from(*v),
        PropertyValue::U8(v) => Value::from(*v),
        PropertyValue::U16(v) => Value::from(*v),
        PropertyValue::U32(v) => Value::from(*v),
        PropertyValue::U64(v) => Value::from(*v),
        PropertyValue::F32(v) => Value::from(*v),
        PropertyValue::Vec2(v) => json!({"x": v.x, "y": v.y}),
        PropertyValue::Vec3(v) => vec3_to_json(*v),
        PropertyValue::Vec4(v) => json!({"x": v.x, "y": v.y, "z": v.z, "w": v.w}),
        PropertyValue::Quat(v) => quat_to_json(*v),
        PropertyValue::Color(c) => json!({"red": c.r, "green": c.g, "blue": c.b}),
        PropertyValue::Cube(c) => {
            json!({"x": c.corner.x, "y": c.corner.y, "z": c.corner.z, "scale": c.scale})
        }
        PropertyValue::String(v) => Value::from(v.as_str()),
        PropertyValue::Bytes(v) => Value::from(STANDARD.encode(v)),
        PropertyValue::Uuid(v) => Value::from(v.hyphenated().to_string()),
        PropertyValue::BoolList(v) => Value::from(v.clone()),
        PropertyValue::FloatList(v) => Value::from(v.clone()),
        PropertyValue::Vec3List(v) => v.iter().copied().map(vec3_to_json).collect(),
        PropertyValue::QuatList(v) => v.iter().copied().map(quat_to_json).collect(),
    }
}

/// Reads a JSON value as `kind`. Returns `None` on a shape mismatch.
#[must_use]
pub fn value_from_json(kind: ValueKind, value: &Value) -> Option<PropertyValue> {
    let parsed = match kind {
        ValueKind::Bool => PropertyValue::Bool(value.as_bool()?),
        ValueKind::U8 => PropertyValue::U8(u8::try_from(value.as_u64()?).ok()?),
        ValueKind::U16 => PropertyValue::U16(u16::try_from(value.as_u64()?).ok()?),
        ValueKind::U32 => PropertyValue::U32(u32::try_from(value.as_u64()?).ok()?),
        ValueKind::U64 => PropertyValue::U64(value.as_u64()?),
        ValueKind::F32 => PropertyValue::F32(value.as_f64()? as f32),
        ValueKind::Vec2 => PropertyValue::Vec2(Vec2::new(field(value, "x")?, field(value, "y")?)),
        ValueKind::Vec3 => PropertyValue::Vec3(vec3_from_json(value)?),
        ValueKind::Vec4 => PropertyValue::Vec4(Vec4::new(
            field(value, "x")?,
            field(value, "y")?,
            field(value, "z")?,
            field(value, "w")?,
        )),
        ValueKind::Quat => PropertyValue::Quat(quat_from_json(value)?),
        ValueKind::Color => PropertyValue::Color(Color::new(
            channel(value, "red")?,
            channel(value, "green")?,
            channel(value, "blue")?,
        )),
        ValueKind::Cube => PropertyValue::Cube(AaCube::new(
            vec3_from_json(value)?,
            field(value, "scale")?,
        )),
        ValueKind::String => PropertyValue::String(value.as_str()?.to_owned()),
        ValueKind::Bytes => PropertyValue::Bytes(STANDARD.decode(value.as_str()?).ok()?),
        ValueKind::Uuid => PropertyValue::Uuid(Uuid::parse_str(value.as_str()?).ok()?),
        ValueKind::BoolList => PropertyValue::BoolList(
            value
                .as_array()?
                .iter()
                .map(Value::as_bool)
                .collect::<Option<_>>()?,
        ),
        ValueKind::FloatList => PropertyValue::FloatList(
            value
                .as_array()?
                .iter()
                .map(|v| v.as_f64().map(|f| f as f32))
                .collect::<Option<_>>()?,
        ),
        ValueKind::Vec3List => PropertyValue::Vec3List(
            value
                .as_array()?
                .iter()
                .map(vec3_from_json)
                .collect::<Option<_>>()?,
        ),
        ValueKind::QuatList => PropertyValue::QuatList(
            value
                .as_array()?
                .iter()
                .map(quat_from_json)
                .collect::<Option<_>>()?,
        ),
    };
    Some(parsed)
}

fn vec3_to_json(v: Vec3) -> Value {
    json!({"x": v.x, "y": v.y, "z": v.z})
}

fn quat_to_json(q: Quat) -> Value {
    json!({"x": q.x, "y": q.y, "z": q.z, "w": q.w})
}

fn field(value: &Value, key: &str) -> Option<f32> {
    value.get(key)?.as_f64().map(|f| f as f32)
}

fn channel(value: &Value, key: &str) -> Option<u8> {
    u8::try_from(value.get(key)?.as_u64()?).ok()
}

fn vec3_from_json(value: &Value) -> Option<Vec3> {
    Some(Vec3::new(
        field(value, "x")?,
        field(value, "y")?,
        field(value, "z")?,
    ))
}

fn quat_from_json(value: &Value) -> Option<Quat> {
    Some(Quat::from_xyzw(
        field(value, "x")?,
        field(value, "y")?,
        field(value, "z")?,
        field(value, "w")?,
    ))
}
