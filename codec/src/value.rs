//! Property values and their wire encoding.
//!
//! Every value is byte aligned and little-endian. Strings, blobs and lists
//! carry a u16 length or element count; bool lists are bit-packed and padded
//! to the next byte.

use bitstream::{BitError, BitReader, BitResult, BitWriter};
use glam::{Quat, Vec2, Vec3, Vec4};
use schema::{Property, PropertyDef, ValueKind, ValueRange};
use uuid::Uuid;

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;

/// An RGB colour with byte channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned cube given by its minimum corner and edge length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AaCube {
    pub corner: Vec3,
    pub scale: f32,
}

impl AaCube {
    #[must_use]
    pub const fn new(corner: Vec3, scale: f32) -> Self {
        Self { corner, scale }
    }
}

/// A property value in decoded form.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Quat(Quat),
    Color(Color),
    Cube(AaCube),
    String(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    BoolList(Vec<bool>),
    FloatList(Vec<f32>),
    Vec3List(Vec<Vec3>),
    QuatList(Vec<Quat>),
}

impl PropertyValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::F32(_) => ValueKind::F32,
            Self::Vec2(_) => ValueKind::Vec2,
            Self::Vec3(_) => ValueKind::Vec3,
            Self::Vec4(_) => ValueKind::Vec4,
            Self::Quat(_) => ValueKind::Quat,
            Self::Color(_) => ValueKind::Color,
            Self::Cube(_) => ValueKind::Cube,
            Self::String(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Uuid(_) => ValueKind::Uuid,
            Self::BoolList(_) => ValueKind::BoolList,
            Self::FloatList(_) => ValueKind::FloatList,
            Self::Vec3List(_) => ValueKind::Vec3List,
            Self::QuatList(_) => ValueKind::QuatList,
        }
    }

    /// The zero value of `kind`. Quaternions default to identity.
    #[must_use]
    pub const fn zero(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Bool => Self::Bool(false),
            ValueKind::U8 => Self::U8(0),
            ValueKind::U16 => Self::U16(0),
            ValueKind::U32 => Self::U32(0),
            ValueKind::U64 => Self::U64(0),
            ValueKind::F32 => Self::F32(0.0),
            ValueKind::Vec2 => Self::Vec2(Vec2::ZERO),
            ValueKind::Vec3 => Self::Vec3(Vec3::ZERO),
            ValueKind::Vec4 => Self::Vec4(Vec4::ZERO),
            ValueKind::Quat => Self::Quat(Quat::IDENTITY),
            ValueKind::Color => Self::Color(Color::BLACK),
            ValueKind::Cube => Self::Cube(AaCube::new(Vec3::ZERO, 0.0)),
            ValueKind::String => Self::String(String::new()),
            ValueKind::Bytes => Self::Bytes(Vec::new()),
            ValueKind::Uuid => Self::Uuid(Uuid::nil()),
            ValueKind::BoolList => Self::BoolList(Vec::new()),
            ValueKind::FloatList => Self::FloatList(Vec::new()),
            ValueKind::Vec3List => Self::Vec3List(Vec::new()),
            ValueKind::QuatList => Self::QuatList(Vec::new()),
        }
    }

    /// Element count for lists, byte length for strings and blobs.
    #[must_use]
    pub fn list_len(&self) -> Option<usize> {
        match self {
            Self::String(value) => Some(value.len()),
            Self::Bytes(value) => Some(value.len()),
            Self::BoolList(value) => Some(value.len()),
            Self::FloatList(value) => Some(value.len()),
            Self::Vec3List(value) => Some(value.len()),
            Self::QuatList(value) => Some(value.len()),
            _ => None,
        }
    }

    /// Returns the value clamped component-wise into `range`.
    ///
    /// Non-numeric kinds are returned unchanged.
    #[must_use]
    pub fn clamped(self, range: &ValueRange) -> Self {
        let clamp_f32 = |value: f32| range.clamp(f64::from(value)) as f32;
        let clamp_vec3 = |value: Vec3| {
            Vec3::new(clamp_f32(value.x), clamp_f32(value.y), clamp_f32(value.z))
        };
        match self {
            Self::U8(value) => Self::U8(range.clamp(f64::from(value)) as u8),
            Self::U16(value) => Self::U16(range.clamp(f64::from(value)) as u16),
            Self::U32(value) => Self::U32(range.clamp(f64::from(value)) as u32),
            Self::U64(value) => Self::U64(range.clamp(value as f64) as u64),
            Self::F32(value) => Self::F32(clamp_f32(value)),
            Self::Vec2(value) => Self::Vec2(Vec2::new(clamp_f32(value.x), clamp_f32(value.y))),
            Self::Vec3(value) => Self::Vec3(clamp_vec3(value)),
            Self::Vec4(value) => Self::Vec4(Vec4::new(
                clamp_f32(value.x),
                clamp_f32(value.y),
                clamp_f32(value.z),
                clamp_f32(value.w),
            )),
            Self::FloatList(values) => Self::FloatList(values.into_iter().map(clamp_f32).collect()),
            Self::Vec3List(values) => Self::Vec3List(values.into_iter().map(clamp_vec3).collect()),
            other => other,
        }
    }

    /// Number of bytes [`encode`](Self::encode) writes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        if let Some(size) = self.kind().fixed_size() {
            return size;
        }
        let payload = match self {
            Self::String(value) => value.len(),
            Self::Bytes(value) => value.len(),
            Self::BoolList(value) => value.len().div_ceil(8),
            Self::FloatList(value) => value.len() * 4,
            Self::Vec3List(value) => value.len() * 12,
            Self::QuatList(value) => value.len() * 16,
            _ => 0,
        };
        2 + payload
    }

    /// Writes the value at a byte boundary.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::ValueOutOfRange`] if a length does not fit in u16,
    /// or [`BitError::MisalignedAccess`] if `writer` is not byte aligned.
    pub fn encode(&self, writer: &mut BitWriter) -> BitResult<()> {
        match self {
            Self::Bool(value) => writer.write_u8_aligned(u8::from(*value)),
            Self::U8(value) => writer.write_u8_aligned(*value),
            Self::U16(value) => writer.write_u16_aligned(*value),
            Self::U32(value) => writer.write_u32_aligned(*value),
            Self::U64(value) => writer.write_u64_aligned(*value),
            Self::F32(value) => writer.write_f32_aligned(*value),
            Self::Vec2(value) => write_floats(writer, &value.to_array()),
            Self::Vec3(value) => write_floats(writer, &value.to_array()),
            Self::Vec4(value) => write_floats(writer, &value.to_array()),
            Self::Quat(value) => write_floats(writer, &value.to_array()),
            Self::Color(value) => writer.write_bytes_aligned(&[value.r, value.g, value.b]),
            Self::Cube(value) => {
                write_floats(writer, &value.corner.to_array())?;
                writer.write_f32_aligned(value.scale)
            }
            Self::String(value) => {
                write_len(writer, value.len())?;
                writer.write_bytes_aligned(value.as_bytes())
            }
            Self::Bytes(value) => {
                write_len(writer, value.len())?;
                writer.write_bytes_aligned(value)
            }
            Self::Uuid(value) => writer.write_bytes_aligned(value.as_bytes()),
            Self::BoolList(values) => {
                write_len(writer, values.len())?;
                for &value in values {
                    writer.write_bit(value);
                }
                writer.align_to_byte();
                Ok(())
            }
            Self::FloatList(values) => {
                write_len(writer, values.len())?;
                write_floats(writer, values)
            }
            Self::Vec3List(values) => {
                write_len(writer, values.len())?;
                values
                    .iter()
                    .try_for_each(|value| write_floats(writer, &value.to_array()))
            }
            Self::QuatList(values) => {
                write_len(writer, values.len())?;
                values
                    .iter()
                    .try_for_each(|value| write_floats(writer, &value.to_array()))
            }
        }
    }

    /// Reads a value of `def.kind` at a byte boundary.
    ///
    /// Declared lengths are checked against `limits`, against the property's
    /// own element cap and against the remaining input before anything is
    /// allocated.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LimitsExceeded`], [`CodecError::LengthMismatch`],
    /// [`CodecError::InvalidUtf8`], or a bitstream error if the input ends
    /// inside a fixed-width field.
    pub fn decode(
        def: &PropertyDef,
        reader: &mut BitReader<'_>,
        limits: &CodecLimits,
    ) -> CodecResult<Self> {
        let value = match def.kind {
            ValueKind::Bool => Self::Bool(reader.read_u8_aligned()? != 0),
            ValueKind::U8 => Self::U8(reader.read_u8_aligned()?),
            ValueKind::U16 => Self::U16(reader.read_u16_aligned()?),
            ValueKind::U32 => Self::U32(reader.read_u32_aligned()?),
            ValueKind::U64 => Self::U64(reader.read_u64_aligned()?),
            ValueKind::F32 => Self::F32(reader.read_f32_aligned()?),
            ValueKind::Vec2 => Self::Vec2(Vec2::from_array(read_floats(reader)?)),
            ValueKind::Vec3 => Self::Vec3(Vec3::from_array(read_floats(reader)?)),
            ValueKind::Vec4 => Self::Vec4(Vec4::from_array(read_floats(reader)?)),
            ValueKind::Quat => Self::Quat(Quat::from_array(read_floats(reader)?)),
            ValueKind::Color => {
                let [r, g, b] = reader.read_aligned_array::<3>()?;
                Self::Color(Color::new(r, g, b))
            }
            ValueKind::Cube => {
                let corner = Vec3::from_array(read_floats(reader)?);
                let scale = reader.read_f32_aligned()?;
                Self::Cube(AaCube::new(corner, scale))
            }
            ValueKind::Uuid => Self::Uuid(Uuid::from_bytes(reader.read_aligned_array::<16>()?)),
            ValueKind::String => {
                let len = read_len(reader, def, LimitKind::StringBytes, limits.max_string_len, 1)?;
                let bytes = reader.read_bytes_aligned(len)?;
                let text = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 {
                    property: def.property,
                })?;
                Self::String(text.to_owned())
            }
            ValueKind::Bytes => {
                let len = read_len(reader, def, LimitKind::BlobBytes, limits.max_blob_len, 1)?;
                Self::Bytes(reader.read_bytes_aligned(len)?.to_vec())
            }
            ValueKind::BoolList => {
                let count = read_count(reader, def, limits)?;
                check_remaining(reader, def.property, count.div_ceil(8))?;
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(reader.read_bit()?);
                }
                reader.align_to_byte()?;
                Self::BoolList(values)
            }
            ValueKind::FloatList => {
                let count = read_count(reader, def, limits)?;
                check_remaining(reader, def.property, count * 4)?;
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(reader.read_f32_aligned()?);
                }
                Self::FloatList(values)
            }
            ValueKind::Vec3List => {
                let count = read_count(reader, def, limits)?;
                check_remaining(reader, def.property, count * 12)?;
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(Vec3::from_array(read_floats(reader)?));
                }
                Self::Vec3List(values)
            }
            ValueKind::QuatList => {
                let count = read_count(reader, def, limits)?;
                check_remaining(reader, def.property, count * 16)?;
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(Quat::from_array(read_floats(reader)?));
                }
                Self::QuatList(values)
            }
        };
        Ok(value)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u8(&self) -> Option<u8> {
        match self {
            Self::U8(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u16(&self) -> Option<u16> {
        match self {
            Self::U16(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f32(&self) -> Option<f32> {
        match self {
            Self::F32(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Self::Vec3(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_quat(&self) -> Option<Quat> {
        match self {
            Self::Quat(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Uuid(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_vec3_list(&self) -> Option<&[Vec3]> {
        match self {
            Self::Vec3List(values) => Some(values),
            _ => None,
        }
    }
}

/// Checks `value` against `def` and prepares it for storage.
///
/// Returns `Ok(None)` when a list exceeds the property's element cap; the
/// caller keeps the old value.
pub(crate) fn normalize_for(
    def: &PropertyDef,
    value: PropertyValue,
) -> CodecResult<Option<PropertyValue>> {
    if value.kind() != def.kind {
        return Err(CodecError::TypeMismatch {
            property: def.property,
            expected: def.kind,
            found: value.kind(),
        });
    }
    if let Some(len) = value.list_len() {
        if def.max_len.is_some_and(|max| len > max) {
            return Ok(None);
        }
        if len > usize::from(u16::MAX) {
            return Err(CodecError::ValueTooLong {
                property: def.property,
                len,
            });
        }
    }
    Ok(Some(match def.range {
        Some(range) => value.clamped(&range),
        None => value,
    }))
}

fn write_len(writer: &mut BitWriter, len: usize) -> BitResult<()> {
    let len = u16::try_from(len).map_err(|_| BitError::ValueOutOfRange {
        value: len as u64,
        bits: 16,
    })?;
    writer.write_u16_aligned(len)
}

fn write_floats(writer: &mut BitWriter, values: &[f32]) -> BitResult<()> {
    values
        .iter()
        .try_for_each(|&value| writer.write_f32_aligned(value))
}

fn read_floats<const N: usize>(reader: &mut BitReader<'_>) -> BitResult<[f32; N]> {
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = reader.read_f32_aligned()?;
    }
    Ok(out)
}

fn read_len(
    reader: &mut BitReader<'_>,
    def: &PropertyDef,
    kind: LimitKind,
    limit: usize,
    element_size: usize,
) -> CodecResult<usize> {
    let len = usize::from(reader.read_u16_aligned()?);
    if len > limit {
        return Err(CodecError::LimitsExceeded {
            kind,
            limit,
            actual: len,
        });
    }
    check_remaining(reader, def.property, len * element_size)?;
    Ok(len)
}

fn read_count(
    reader: &mut BitReader<'_>,
    def: &PropertyDef,
    limits: &CodecLimits,
) -> CodecResult<usize> {
    let count = usize::from(reader.read_u16_aligned()?);
    if count > limits.max_list_len {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::ListLength,
            limit: limits.max_list_len,
            actual: count,
        });
    }
    if let Some(max) = def.max_len {
        if count > max {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::PropertyMaxLen,
                limit: max,
                actual: count,
            });
        }
    }
    Ok(count)
}

fn check_remaining(
    reader: &BitReader<'_>,
    property: Property,
    declared: usize,
) -> CodecResult<()> {
    let available = reader.bytes_remaining();
    if declared > available {
        return Err(CodecError::LengthMismatch {
            property,
            declared,
            available,
        });
    }
    Ok(())
}
