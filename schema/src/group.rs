//! Property groups and zone component modes.

use crate::flags::PropertyFlags;
use crate::property::Property;

/// A nested bundle of related properties with a contiguous ordinal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupKind {
    Grab,
    Pulse,
    Animation,
    KeyLight,
    AmbientLight,
    Skybox,
    Haze,
    Bloom,
    Ring,
}

impl GroupKind {
    /// Every group, in ordinal order.
    pub const ALL: [Self; 9] = [
        Self::Grab,
        Self::Pulse,
        Self::Animation,
        Self::KeyLight,
        Self::AmbientLight,
        Self::Skybox,
        Self::Haze,
        Self::Bloom,
        Self::Ring,
    ];

    /// Name used as the prefix of member property names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Pulse => "pulse",
            Self::Animation => "animation",
            Self::KeyLight => "keyLight",
            Self::AmbientLight => "ambientLight",
            Self::Skybox => "skybox",
            Self::Haze => "haze",
            Self::Bloom => "bloom",
            Self::Ring => "ring",
        }
    }

    /// Looks a group up by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.name() == name)
    }

    /// First and last member, inclusive.
    #[must_use]
    pub const fn bounds(self) -> (Property, Property) {
        match self {
            Self::Grab => (Property::GrabGrabbable, Property::GrabEquippableIndicatorOffset),
            Self::Pulse => (Property::PulseMin, Property::PulseAlphaMode),
            Self::Animation => (Property::AnimationUrl, Property::AnimationHold),
            Self::KeyLight => (Property::KeyLightMode, Property::KeyLightCastShadows),
            Self::AmbientLight => (Property::AmbientLightMode, Property::AmbientLightUrl),
            Self::Skybox => (Property::SkyboxMode, Property::SkyboxUrl),
            Self::Haze => (Property::HazeMode, Property::HazeKeyLightAltitude),
            Self::Bloom => (Property::BloomMode, Property::BloomSize),
            Self::Ring => (Property::RingStartAngle, Property::RingMinorTickMarksColor),
        }
    }

    /// Members in ordinal order.
    pub fn members(self) -> impl Iterator<Item = Property> {
        let (first, last) = self.bounds();
        (first.ordinal()..=last.ordinal()).filter_map(Property::from_ordinal)
    }

    /// Members as a flag set.
    #[must_use]
    pub fn member_flags(self) -> PropertyFlags {
        self.members().collect()
    }

    /// Returns `true` if `property` belongs to this group.
    #[must_use]
    pub const fn contains(self, property: Property) -> bool {
        let (first, last) = self.bounds();
        let ordinal = property.ordinal();
        first.ordinal() <= ordinal && ordinal <= last.ordinal()
    }

    /// The mode property for zone component groups.
    #[must_use]
    pub const fn mode_property(self) -> Option<Property> {
        match self {
            Self::KeyLight => Some(Property::KeyLightMode),
            Self::AmbientLight => Some(Property::AmbientLightMode),
            Self::Skybox => Some(Property::SkyboxMode),
            Self::Haze => Some(Property::HazeMode),
            Self::Bloom => Some(Property::BloomMode),
            Self::Grab | Self::Pulse | Self::Animation | Self::Ring => None,
        }
    }

    /// Returns `true` for groups carrying an inherit/disabled/enabled mode.
    #[must_use]
    pub const fn is_zone_component(self) -> bool {
        self.mode_property().is_some()
    }

    /// The zone component group whose mode is `property`.
    #[must_use]
    pub fn with_mode_property(property: Property) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.mode_property() == Some(property))
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tri-state mode of a zone component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ComponentMode {
    /// Use the enclosing zone's setting.
    #[default]
    Inherit = 0,
    Disabled = 1,
    Enabled = 2,
}

impl ComponentMode {
    /// Converts a raw wire value. Out-of-range values clamp to `Enabled`.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Inherit,
            1 => Self::Disabled,
            _ => Self::Enabled,
        }
    }

    /// Returns the raw wire value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Disabled => "disabled",
            Self::Enabled => "enabled",
        }
    }

    /// Parses a mode name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Inherit, Self::Disabled, Self::Enabled]
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}
