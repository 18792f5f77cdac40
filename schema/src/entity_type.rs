//! Entity subtypes and their wire tags.

use std::fmt;

/// Closed set of entity subtypes.
///
/// `Box` and `Sphere` are presentation aliases of `Shape`: records store them
/// as a `Shape` with a forced shape name, and assigning a new shape name
/// changes the visible type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum EntityType {
    /// Placeholder for tags this peer does not know.
    #[default]
    Unknown = 0,
    Model = 1,
    Light = 2,
    Text = 3,
    ParticleEffect = 4,
    Zone = 5,
    Line = 6,
    PolyVox = 7,
    PolyLine = 8,
    Shape = 9,
    Box = 10,
    Sphere = 11,
    Web = 12,
    Material = 13,
    Image = 14,
    Grid = 15,
    Gizmo = 16,
}

impl EntityType {
    /// Number of entity types, including `Unknown`.
    pub const COUNT: usize = 17;

    /// Every type, in tag order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Unknown,
        Self::Model,
        Self::Light,
        Self::Text,
        Self::ParticleEffect,
        Self::Zone,
        Self::Line,
        Self::PolyVox,
        Self::PolyLine,
        Self::Shape,
        Self::Box,
        Self::Sphere,
        Self::Web,
        Self::Material,
        Self::Image,
        Self::Grid,
        Self::Gizmo,
    ];

    /// Returns the wire tag.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Returns the type for a wire tag, or `None` for unknown tags.
    #[must_use]
    pub fn from_tag(tag: u32) -> Option<Self> {
        usize::try_from(tag)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .filter(|entity_type| *entity_type != Self::Unknown)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Model => "Model",
            Self::Light => "Light",
            Self::Text => "Text",
            Self::ParticleEffect => "ParticleEffect",
            Self::Zone => "Zone",
            Self::Line => "Line",
            Self::PolyVox => "PolyVox",
            Self::PolyLine => "PolyLine",
            Self::Shape => "Shape",
            Self::Box => "Box",
            Self::Sphere => "Sphere",
            Self::Web => "Web",
            Self::Material => "Material",
            Self::Image => "Image",
            Self::Grid => "Grid",
            Self::Gizmo => "Gizmo",
        }
    }

    /// Looks a type up by display name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|entity_type| entity_type.name().eq_ignore_ascii_case(name))
    }

    /// The stored type: `Shape` for `Box` and `Sphere`, `self` otherwise.
    #[must_use]
    pub const fn base_type(self) -> Self {
        match self {
            Self::Box | Self::Sphere => Self::Shape,
            other => other,
        }
    }

    /// The shape name an alias forces onto its `Shape` record.
    #[must_use]
    pub const fn forced_shape(self) -> Option<&'static str> {
        match self {
            Self::Box => Some("Cube"),
            Self::Sphere => Some("Sphere"),
            _ => None,
        }
    }

    /// The visible type of a shape-family record with the given shape name.
    #[must_use]
    pub fn from_shape_name(shape: &str) -> Self {
        match shape {
            "Cube" => Self::Box,
            "Sphere" => Self::Sphere,
            _ => Self::Shape,
        }
    }

    /// Returns `true` for `Shape`, `Box` and `Sphere`.
    #[must_use]
    pub const fn is_shape_family(self) -> bool {
        matches!(self, Self::Shape | Self::Box | Self::Sphere)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
