//! Value kinds and numeric ranges.

/// The representation of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    F32,
    Vec2,
    Vec3,
    Vec4,
    Quat,
    /// Byte RGB triple.
    Color,
    /// Axis-aligned cube: corner plus edge length.
    Cube,
    String,
    Bytes,
    Uuid,
    BoolList,
    FloatList,
    Vec3List,
    QuatList,
}

impl ValueKind {
    /// Every kind, in tag order.
    pub const ALL: [Self; 19] = [
        Self::Bool,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::F32,
        Self::Vec2,
        Self::Vec3,
        Self::Vec4,
        Self::Quat,
        Self::Color,
        Self::Cube,
        Self::String,
        Self::Bytes,
        Self::Uuid,
        Self::BoolList,
        Self::FloatList,
        Self::Vec3List,
        Self::QuatList,
    ];

    /// Stable tag used when fingerprinting the table.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Encoded size for fixed-width kinds, `None` for length-prefixed ones.
    #[must_use]
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            Self::Bool | Self::U8 => Some(1),
            Self::U16 => Some(2),
            Self::Color => Some(3),
            Self::U32 | Self::F32 => Some(4),
            Self::U64 | Self::Vec2 => Some(8),
            Self::Vec3 => Some(12),
            Self::Vec4 | Self::Quat | Self::Cube | Self::Uuid => Some(16),
            Self::String
            | Self::Bytes
            | Self::BoolList
            | Self::FloatList
            | Self::Vec3List
            | Self::QuatList => None,
        }
    }

    /// Returns `true` for kinds a [`ValueRange`] can clamp.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::F32
                | Self::Vec2
                | Self::Vec3
                | Self::Vec4
                | Self::FloatList
                | Self::Vec3List
        )
    }

    /// Returns `true` for sequence kinds.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::BoolList | Self::FloatList | Self::Vec3List | Self::QuatList
        )
    }

    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::Vec2 => "vec2",
            Self::Vec3 => "vec3",
            Self::Vec4 => "vec4",
            Self::Quat => "quat",
            Self::Color => "color",
            Self::Cube => "cube",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Uuid => "uuid",
            Self::BoolList => "bool[]",
            Self::FloatList => "f32[]",
            Self::Vec3List => "vec3[]",
            Self::QuatList => "quat[]",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive clamp range for numeric properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Creates a range. `min` must not exceed `max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range. NaN is mapped to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
