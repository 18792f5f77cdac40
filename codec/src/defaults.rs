//! Default property values.
//!
//! Properties not listed here default to the zero value of their kind.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec2, Vec3};
use schema::{registry, Property};

use crate::value::{Color, PropertyValue};

/// Shape name a fresh shape-family record starts with.
pub const DEFAULT_SHAPE: &str = "Sphere";

/// Joint index meaning "no parent joint".
pub const NO_PARENT_JOINT: u16 = u16::MAX;

/// Returns the default value of `property`.
#[must_use]
pub fn default_value(property: Property) -> PropertyValue {
    use PropertyValue as V;

    match property {
        // Core
        Property::ParentJointIndex => V::U16(NO_PARENT_JOINT),
        Property::Visible | Property::CanCastShadow => V::Bool(true),
        Property::Dimensions => V::Vec3(Vec3::splat(0.1)),
        Property::RegistrationPoint => V::Vec3(Vec3::splat(0.5)),
        Property::Color => V::Color(Color::WHITE),
        Property::Alpha => V::F32(1.0),

        // Physics
        Property::Density => V::F32(1000.0),
        Property::Damping | Property::AngularDamping => V::F32(0.39),
        Property::Restitution | Property::Friction => V::F32(0.5),
        Property::Lifetime => V::F32(-1.0),
        Property::CollisionMask => V::U16(31),

        Property::CloneLifetime => V::F32(300.0),

        // Grab
        Property::GrabGrabbable | Property::GrabFollowsController => V::Bool(true),
        Property::GrabEquippableIndicatorScale => V::Vec3(Vec3::ONE),

        // Pulse
        Property::PulseMax | Property::PulsePeriod => V::F32(1.0),

        // ParticleEffect
        Property::IsEmitting => V::Bool(true),
        Property::MaxParticles => V::U32(1000),
        Property::Lifespan => V::F32(3.0),
        Property::EmitRate => V::F32(15.0),
        Property::EmitSpeed => V::F32(5.0),
        Property::SpeedSpread => V::F32(1.0),
        Property::EmitOrientation => V::Quat(Quat::from_axis_angle(Vec3::X, -FRAC_PI_2)),
        Property::EmitRadiusStart => V::F32(1.0),
        Property::AzimuthStart => V::F32(-PI),
        Property::AzimuthFinish => V::F32(PI),
        Property::EmitAcceleration => V::Vec3(Vec3::new(0.0, -9.8, 0.0)),
        Property::ParticleRadius | Property::RadiusStart | Property::RadiusFinish => {
            V::F32(0.025)
        }
        Property::ColorSpread => V::Color(Color::BLACK),
        Property::ColorStart | Property::ColorFinish => V::Vec3(Vec3::splat(255.0)),
        Property::AlphaStart | Property::AlphaFinish => V::F32(1.0),

        // Animation
        Property::AnimationAllowTranslation | Property::AnimationLoop => V::Bool(true),
        Property::AnimationFps => V::F32(30.0),
        Property::AnimationLastFrame => V::F32(100_000.0),

        // Light
        Property::Intensity => V::F32(1.0),
        Property::FalloffRadius => V::F32(0.1),
        Property::Cutoff => V::F32(FRAC_PI_2),

        // Text
        Property::LineHeight => V::F32(0.1),
        Property::TextColor => V::Color(Color::WHITE),
        Property::TextAlpha | Property::BackgroundAlpha => V::F32(1.0),

        // Zone
        Property::KeyLightColor => V::Color(Color::WHITE),
        Property::KeyLightIntensity => V::F32(1.0),
        Property::KeyLightDirection => V::Vec3(Vec3::new(0.0, -1.0, 0.0)),
        Property::AmbientLightIntensity => V::F32(0.5),
        Property::HazeRange | Property::HazeKeyLightRange => V::F32(1000.0),
        Property::HazeColor => V::Color(Color::new(128, 154, 179)),
        Property::HazeGlareColor => V::Color(Color::new(255, 229, 179)),
        Property::HazeGlareAngle => V::F32(20.0),
        Property::HazeCeiling | Property::HazeKeyLightAltitude => V::F32(200.0),
        Property::BloomIntensity => V::F32(0.25),
        Property::BloomThreshold => V::F32(0.7),
        Property::BloomSize => V::F32(0.9),
        Property::FlyingAllowed | Property::GhostingAllowed => V::Bool(true),

        Property::VoxelVolumeSize => V::Vec3(Vec3::splat(32.0)),
        Property::Dpi => V::U16(30),
        Property::LineWidth => V::F32(2.0),
        Property::IsUvModeStretch => V::Bool(true),
        Property::Shape => V::String(DEFAULT_SHAPE.to_owned()),
        Property::MaterialMappingScale => V::Vec2(Vec2::ONE),
        Property::KeepAspectRatio => V::Bool(true),

        // Grid
        Property::FollowCamera => V::Bool(true),
        Property::MajorGridEvery => V::U32(5),
        Property::MinorGridEvery => V::F32(1.0),

        // Ring
        Property::RingEndAngle => V::F32(360.0),
        Property::RingInnerStartColor
        | Property::RingInnerEndColor
        | Property::RingOuterStartColor
        | Property::RingOuterEndColor => V::Color(Color::WHITE),
        Property::RingInnerStartAlpha
        | Property::RingInnerEndAlpha
        | Property::RingOuterStartAlpha
        | Property::RingOuterEndAlpha => V::F32(1.0),

        other => V::zero(registry().def(other).kind),
    }
}

/// Returns `true` if `value` equals the default of `property`.
#[must_use]
pub fn is_default(property: Property, value: &PropertyValue) -> bool {
    default_value(property) == *value
}
