//! The declarative property table.
//!
//! One row per ordinal, in ordinal order. The registry, dispatcher, encoder,
//! decoder and change tracking all walk this table instead of naming
//! properties individually.

use std::f64::consts::PI;

use crate::group::GroupKind;
use crate::kind::{ValueKind, ValueRange};
use crate::property::Property;

/// Maximum number of points in a line or poly-line.
pub const MAX_POINTS_PER_LINE: usize = 70;

/// Highest animation frame index.
const MAXIMUM_FRAME: f64 = 100_000.0;

/// Static description of one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDef {
    /// The ordinal this row describes.
    pub property: Property,
    /// Registry name. Group members are prefixed with their group name.
    pub name: &'static str,
    /// Value representation on the wire and in records.
    pub kind: ValueKind,
    /// Advisory clamp range for numeric kinds.
    pub range: Option<ValueRange>,
    /// Maximum element count for list kinds.
    pub max_len: Option<usize>,
    /// Owning group, if any.
    pub group: Option<GroupKind>,
}

impl PropertyDef {
    /// Returns the ordinal of this row.
    #[must_use]
    pub const fn ordinal(&self) -> u16 {
        self.property as u16
    }

    /// Returns the name without its group prefix.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name
            .split_once('.')
            .map_or(self.name, |(_, short)| short)
    }

    const fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(ValueRange::new(min, max));
        self
    }

    const fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    const fn group(mut self, group: GroupKind) -> Self {
        self.group = Some(group);
        self
    }
}

const fn def(property: Property, name: &'static str, kind: ValueKind) -> PropertyDef {
    PropertyDef {
        property,
        name,
        kind,
        range: None,
        max_len: None,
        group: None,
    }
}

/// Every property, indexed by ordinal.
pub static PROPERTIES: [PropertyDef; Property::COUNT] = [
    // Core
    def(Property::SimulationOwner, "simulationOwner", ValueKind::Bytes),
    def(Property::ParentId, "parentID", ValueKind::Uuid),
    def(Property::ParentJointIndex, "parentJointIndex", ValueKind::U16),
    def(Property::Visible, "visible", ValueKind::Bool),
    def(Property::Name, "name", ValueKind::String),
    def(Property::Locked, "locked", ValueKind::Bool),
    def(Property::UserData, "userData", ValueKind::String),
    def(Property::Href, "href", ValueKind::String),
    def(Property::Description, "description", ValueKind::String),
    def(Property::Position, "position", ValueKind::Vec3),
    def(Property::Dimensions, "dimensions", ValueKind::Vec3).range(0.001, 16_384.0),
    def(Property::Rotation, "rotation", ValueKind::Quat),
    def(Property::RegistrationPoint, "registrationPoint", ValueKind::Vec3).range(0.0, 1.0),
    def(Property::LastEditedBy, "lastEditedBy", ValueKind::Uuid),
    def(Property::QueryAaCube, "queryAACube", ValueKind::Cube),
    def(Property::CanCastShadow, "canCastShadow", ValueKind::Bool),
    def(Property::Color, "color", ValueKind::Color),
    def(Property::Alpha, "alpha", ValueKind::F32).range(0.0, 1.0),
    // Physics
    def(Property::Density, "density", ValueKind::F32).range(100.0, 10_000.0),
    def(Property::Velocity, "velocity", ValueKind::Vec3),
    def(Property::AngularVelocity, "angularVelocity", ValueKind::Vec3),
    def(Property::Gravity, "gravity", ValueKind::Vec3),
    def(Property::Acceleration, "acceleration", ValueKind::Vec3),
    def(Property::Damping, "damping", ValueKind::F32).range(0.0, 1.0),
    def(Property::AngularDamping, "angularDamping", ValueKind::F32).range(0.0, 1.0),
    def(Property::Restitution, "restitution", ValueKind::F32).range(0.0, 0.99),
    def(Property::Friction, "friction", ValueKind::F32).range(0.0, 10.0),
    def(Property::Lifetime, "lifetime", ValueKind::F32),
    def(Property::Collisionless, "collisionless", ValueKind::Bool),
    def(Property::CollisionMask, "collisionMask", ValueKind::U16),
    def(Property::Dynamic, "dynamic", ValueKind::Bool),
    def(Property::CollisionSoundUrl, "collisionSoundURL", ValueKind::String),
    def(Property::ActionData, "actionData", ValueKind::Bytes),
    // Cloning
    def(Property::Cloneable, "cloneable", ValueKind::Bool),
    def(Property::CloneLifetime, "cloneLifetime", ValueKind::F32),
    def(Property::CloneLimit, "cloneLimit", ValueKind::F32),
    def(Property::CloneDynamic, "cloneDynamic", ValueKind::Bool),
    def(Property::CloneAvatarEntity, "cloneAvatarEntity", ValueKind::Bool),
    def(Property::CloneOriginId, "cloneOriginID", ValueKind::Uuid),
    // Scripts
    def(Property::Script, "script", ValueKind::String),
    def(Property::ScriptTimestamp, "scriptTimestamp", ValueKind::U64),
    def(Property::ServerScripts, "serverScripts", ValueKind::String),
    // Certification
    def(Property::ItemName, "itemName", ValueKind::String),
    def(Property::ItemDescription, "itemDescription", ValueKind::String),
    def(Property::ItemCategories, "itemCategories", ValueKind::String),
    def(Property::ItemArtist, "itemArtist", ValueKind::String),
    def(Property::ItemLicense, "itemLicense", ValueKind::String),
    def(Property::LimitedRun, "limitedRun", ValueKind::U32),
    def(Property::MarketplaceId, "marketplaceID", ValueKind::String),
    def(Property::EditionNumber, "editionNumber", ValueKind::U32),
    def(Property::EntityInstanceNumber, "entityInstanceNumber", ValueKind::U32),
    def(Property::CertificateId, "certificateID", ValueKind::String),
    def(Property::StaticCertificateVersion, "staticCertificateVersion", ValueKind::U32),
    // Grab group, common to every type
    def(Property::GrabGrabbable, "grab.grabbable", ValueKind::Bool).group(GroupKind::Grab),
    def(Property::GrabKinematic, "grab.grabKinematic", ValueKind::Bool).group(GroupKind::Grab),
    def(Property::GrabFollowsController, "grab.grabFollowsController", ValueKind::Bool)
        .group(GroupKind::Grab),
    def(Property::GrabTriggerable, "grab.triggerable", ValueKind::Bool).group(GroupKind::Grab),
    def(Property::GrabEquippable, "grab.equippable", ValueKind::Bool).group(GroupKind::Grab),
    def(Property::GrabLeftEquippablePosition, "grab.equippableLeftPosition", ValueKind::Vec3)
        .group(GroupKind::Grab),
    def(Property::GrabLeftEquippableRotation, "grab.equippableLeftRotation", ValueKind::Quat)
        .group(GroupKind::Grab),
    def(Property::GrabRightEquippablePosition, "grab.equippableRightPosition", ValueKind::Vec3)
        .group(GroupKind::Grab),
    def(Property::GrabRightEquippableRotation, "grab.equippableRightRotation", ValueKind::Quat)
        .group(GroupKind::Grab),
    def(Property::GrabEquippableIndicatorUrl, "grab.equippableIndicatorURL", ValueKind::String)
        .group(GroupKind::Grab),
    def(Property::GrabEquippableIndicatorScale, "grab.equippableIndicatorScale", ValueKind::Vec3)
        .group(GroupKind::Grab),
    def(Property::GrabEquippableIndicatorOffset, "grab.equippableIndicatorOffset", ValueKind::Vec3)
        .group(GroupKind::Grab),
    // Shared by several types
    def(Property::ShapeType, "shapeType", ValueKind::U32),
    def(Property::CompoundShapeUrl, "compoundShapeURL", ValueKind::String),
    def(Property::Textures, "textures", ValueKind::String),
    def(Property::PulseMin, "pulse.min", ValueKind::F32).group(GroupKind::Pulse),
    def(Property::PulseMax, "pulse.max", ValueKind::F32).group(GroupKind::Pulse),
    def(Property::PulsePeriod, "pulse.period", ValueKind::F32)
        .range(0.0, 1_000_000.0)
        .group(GroupKind::Pulse),
    def(Property::PulseColorMode, "pulse.colorMode", ValueKind::U8)
        .range(0.0, 2.0)
        .group(GroupKind::Pulse),
    def(Property::PulseAlphaMode, "pulse.alphaMode", ValueKind::U8)
        .range(0.0, 2.0)
        .group(GroupKind::Pulse),
    // ParticleEffect
    def(Property::IsEmitting, "isEmitting", ValueKind::Bool),
    def(Property::MaxParticles, "maxParticles", ValueKind::U32).range(1.0, 100_000.0),
    def(Property::Lifespan, "lifespan", ValueKind::F32).range(0.0, 300.0),
    def(Property::EmitRate, "emitRate", ValueKind::F32).range(0.0, 100_000.0),
    def(Property::EmitSpeed, "emitSpeed", ValueKind::F32).range(0.0, 1_000.0),
    def(Property::SpeedSpread, "speedSpread", ValueKind::F32).range(0.0, 1_000.0),
    def(Property::EmitOrientation, "emitOrientation", ValueKind::Quat),
    def(Property::EmitDimensions, "emitDimensions", ValueKind::Vec3).range(0.0, 16_384.0),
    def(Property::EmitRadiusStart, "emitRadiusStart", ValueKind::F32).range(0.0, 1.0),
    def(Property::PolarStart, "polarStart", ValueKind::F32).range(0.0, PI),
    def(Property::PolarFinish, "polarFinish", ValueKind::F32).range(0.0, PI),
    def(Property::AzimuthStart, "azimuthStart", ValueKind::F32).range(-PI, PI),
    def(Property::AzimuthFinish, "azimuthFinish", ValueKind::F32).range(-PI, PI),
    def(Property::EmitAcceleration, "emitAcceleration", ValueKind::Vec3).range(-100.0, 100.0),
    def(Property::AccelerationSpread, "accelerationSpread", ValueKind::Vec3).range(0.0, 100.0),
    def(Property::ParticleRadius, "particleRadius", ValueKind::F32).range(0.0, 4.0),
    def(Property::RadiusSpread, "radiusSpread", ValueKind::F32).range(0.0, 4.0),
    def(Property::RadiusStart, "radiusStart", ValueKind::F32).range(0.0, 4.0),
    def(Property::RadiusFinish, "radiusFinish", ValueKind::F32).range(0.0, 4.0),
    def(Property::ColorSpread, "colorSpread", ValueKind::Color),
    def(Property::ColorStart, "colorStart", ValueKind::Vec3).range(0.0, 255.0),
    def(Property::ColorFinish, "colorFinish", ValueKind::Vec3).range(0.0, 255.0),
    def(Property::AlphaSpread, "alphaSpread", ValueKind::F32).range(0.0, 1.0),
    def(Property::AlphaStart, "alphaStart", ValueKind::F32).range(0.0, 1.0),
    def(Property::AlphaFinish, "alphaFinish", ValueKind::F32).range(0.0, 1.0),
    def(Property::EmitterShouldTrail, "emitterShouldTrail", ValueKind::Bool),
    def(Property::ParticleSpin, "particleSpin", ValueKind::F32).range(-2.0 * PI, 2.0 * PI),
    def(Property::SpinSpread, "spinSpread", ValueKind::F32).range(0.0, 2.0 * PI),
    def(Property::SpinStart, "spinStart", ValueKind::F32).range(-2.0 * PI, 2.0 * PI),
    def(Property::SpinFinish, "spinFinish", ValueKind::F32).range(-2.0 * PI, 2.0 * PI),
    def(Property::RotateWithEntity, "rotateWithEntity", ValueKind::Bool),
    // Model
    def(Property::ModelUrl, "modelURL", ValueKind::String),
    def(Property::JointRotationsSet, "jointRotationsSet", ValueKind::BoolList),
    def(Property::JointRotations, "jointRotations", ValueKind::QuatList),
    def(Property::JointTranslationsSet, "jointTranslationsSet", ValueKind::BoolList),
    def(Property::JointTranslations, "jointTranslations", ValueKind::Vec3List),
    def(Property::RelayParentJoints, "relayParentJoints", ValueKind::Bool),
    def(Property::AnimationUrl, "animation.url", ValueKind::String).group(GroupKind::Animation),
    def(Property::AnimationAllowTranslation, "animation.allowTranslation", ValueKind::Bool)
        .group(GroupKind::Animation),
    def(Property::AnimationFps, "animation.fps", ValueKind::F32)
        .range(-1_000.0, 1_000.0)
        .group(GroupKind::Animation),
    def(Property::AnimationCurrentFrame, "animation.currentFrame", ValueKind::F32)
        .range(0.0, MAXIMUM_FRAME)
        .group(GroupKind::Animation),
    def(Property::AnimationRunning, "animation.running", ValueKind::Bool)
        .group(GroupKind::Animation),
    def(Property::AnimationLoop, "animation.loop", ValueKind::Bool).group(GroupKind::Animation),
    def(Property::AnimationFirstFrame, "animation.firstFrame", ValueKind::F32)
        .range(0.0, MAXIMUM_FRAME)
        .group(GroupKind::Animation),
    def(Property::AnimationLastFrame, "animation.lastFrame", ValueKind::F32)
        .range(0.0, MAXIMUM_FRAME)
        .group(GroupKind::Animation),
    def(Property::AnimationHold, "animation.hold", ValueKind::Bool).group(GroupKind::Animation),
    // Light
    def(Property::IsSpotlight, "isSpotlight", ValueKind::Bool),
    def(Property::Intensity, "intensity", ValueKind::F32).range(-1_000.0, 10_000.0),
    def(Property::FalloffRadius, "falloffRadius", ValueKind::F32).range(0.0, 10_000.0),
    def(Property::Exponent, "exponent", ValueKind::F32).range(0.0, 1_000.0),
    def(Property::Cutoff, "cutoff", ValueKind::F32).range(0.0, PI / 2.0),
    // Text
    def(Property::Text, "text", ValueKind::String),
    def(Property::LineHeight, "lineHeight", ValueKind::F32).range(0.001, 1_000.0),
    def(Property::TextColor, "textColor", ValueKind::Color),
    def(Property::TextAlpha, "textAlpha", ValueKind::F32).range(0.0, 1.0),
    def(Property::BackgroundColor, "backgroundColor", ValueKind::Color),
    def(Property::BackgroundAlpha, "backgroundAlpha", ValueKind::F32).range(0.0, 1.0),
    def(Property::LeftMargin, "leftMargin", ValueKind::F32).range(0.0, 1_000.0),
    def(Property::RightMargin, "rightMargin", ValueKind::F32).range(0.0, 1_000.0),
    def(Property::TopMargin, "topMargin", ValueKind::F32).range(0.0, 1_000.0),
    def(Property::BottomMargin, "bottomMargin", ValueKind::F32).range(0.0, 1_000.0),
    def(Property::FaceCamera, "faceCamera", ValueKind::Bool),
    // Zone
    def(Property::KeyLightMode, "keyLightMode", ValueKind::U8)
        .range(0.0, 2.0)
        .group(GroupKind::KeyLight),
    def(Property::KeyLightColor, "keyLight.color", ValueKind::Color).group(GroupKind::KeyLight),
    def(Property::KeyLightIntensity, "keyLight.intensity", ValueKind::F32)
        .range(-1_000.0, 10_000.0)
        .group(GroupKind::KeyLight),
    def(Property::KeyLightDirection, "keyLight.direction", ValueKind::Vec3)
        .range(-1.0, 1.0)
        .group(GroupKind::KeyLight),
    def(Property::KeyLightCastShadows, "keyLight.castShadows", ValueKind::Bool)
        .group(GroupKind::KeyLight),
    def(Property::AmbientLightMode, "ambientLightMode", ValueKind::U8)
        .range(0.0, 2.0)
        .group(GroupKind::AmbientLight),
    def(Property::AmbientLightIntensity, "ambientLight.ambientIntensity", ValueKind::F32)
        .range(-1_000.0, 10_000.0)
        .group(GroupKind::AmbientLight),
    def(Property::AmbientLightUrl, "ambientLight.ambientURL", ValueKind::String)
        .group(GroupKind::AmbientLight),
    def(Property::SkyboxMode, "skyboxMode", ValueKind::U8).range(0.0, 2.0).group(GroupKind::Skybox),
    def(Property::SkyboxColor, "skybox.color", ValueKind::Color).group(GroupKind::Skybox),
    def(Property::SkyboxUrl, "skybox.url", ValueKind::String).group(GroupKind::Skybox),
    def(Property::HazeMode, "hazeMode", ValueKind::U8).range(0.0, 2.0).group(GroupKind::Haze),
    def(Property::HazeRange, "haze.hazeRange", ValueKind::F32)
        .range(1.0, 100_000.0)
        .group(GroupKind::Haze),
    def(Property::HazeColor, "haze.hazeColor", ValueKind::Color).group(GroupKind::Haze),
    def(Property::HazeGlareColor, "haze.hazeGlareColor", ValueKind::Color).group(GroupKind::Haze),
    def(Property::HazeEnableGlare, "haze.hazeEnableGlare", ValueKind::Bool).group(GroupKind::Haze),
    def(Property::HazeGlareAngle, "haze.hazeGlareAngle", ValueKind::F32)
        .range(0.0, 180.0)
        .group(GroupKind::Haze),
    def(Property::HazeAltitudeEffect, "haze.hazeAltitudeEffect", ValueKind::Bool)
        .group(GroupKind::Haze),
    def(Property::HazeCeiling, "haze.hazeCeiling", ValueKind::F32).group(GroupKind::Haze),
    def(Property::HazeBaseRef, "haze.hazeBaseRef", ValueKind::F32).group(GroupKind::Haze),
    def(Property::HazeBackgroundBlend, "haze.hazeBackgroundBlend", ValueKind::F32)
        .range(0.0, 1.0)
        .group(GroupKind::Haze),
    def(Property::HazeAttenuateKeyLight, "haze.hazeAttenuateKeyLight", ValueKind::Bool)
        .group(GroupKind::Haze),
    def(Property::HazeKeyLightRange, "haze.hazeKeyLightRange", ValueKind::F32)
        .range(1.0, 100_000.0)
        .group(GroupKind::Haze),
    def(Property::HazeKeyLightAltitude, "haze.hazeKeyLightAltitude", ValueKind::F32)
        .group(GroupKind::Haze),
    def(Property::BloomMode, "bloomMode", ValueKind::U8).range(0.0, 2.0).group(GroupKind::Bloom),
    def(Property::BloomIntensity, "bloom.bloomIntensity", ValueKind::F32)
        .range(0.0, 1.0)
        .group(GroupKind::Bloom),
    def(Property::BloomThreshold, "bloom.bloomThreshold", ValueKind::F32)
        .range(0.0, 1.0)
        .group(GroupKind::Bloom),
    def(Property::BloomSize, "bloom.bloomSize", ValueKind::F32)
        .range(0.0, 2.0)
        .group(GroupKind::Bloom),
    def(Property::FlyingAllowed, "flyingAllowed", ValueKind::Bool),
    def(Property::GhostingAllowed, "ghostingAllowed", ValueKind::Bool),
    def(Property::FilterUrl, "filterURL", ValueKind::String),
    // PolyVox
    def(Property::VoxelVolumeSize, "voxelVolumeSize", ValueKind::Vec3).range(1.0, 128.0),
    def(Property::VoxelData, "voxelData", ValueKind::Bytes),
    def(Property::VoxelSurfaceStyle, "voxelSurfaceStyle", ValueKind::U16).range(0.0, 3.0),
    def(Property::XTextureUrl, "xTextureURL", ValueKind::String),
    def(Property::YTextureUrl, "yTextureURL", ValueKind::String),
    def(Property::ZTextureUrl, "zTextureURL", ValueKind::String),
    def(Property::XNNeighborId, "xNNeighborID", ValueKind::Uuid),
    def(Property::YNNeighborId, "yNNeighborID", ValueKind::Uuid),
    def(Property::ZNNeighborId, "zNNeighborID", ValueKind::Uuid),
    def(Property::XPNeighborId, "xPNeighborID", ValueKind::Uuid),
    def(Property::YPNeighborId, "yPNeighborID", ValueKind::Uuid),
    def(Property::ZPNeighborId, "zPNeighborID", ValueKind::Uuid),
    // Web
    def(Property::SourceUrl, "sourceUrl", ValueKind::String),
    def(Property::Dpi, "dpi", ValueKind::U16).range(1.0, 1_000.0),
    // Line and PolyLine
    def(Property::LineWidth, "lineWidth", ValueKind::F32).range(0.0, 1_000.0),
    def(Property::LinePoints, "linePoints", ValueKind::Vec3List).max_len(MAX_POINTS_PER_LINE),
    def(Property::Normals, "normals", ValueKind::Vec3List).max_len(MAX_POINTS_PER_LINE),
    def(Property::StrokeColors, "strokeColors", ValueKind::Vec3List).max_len(MAX_POINTS_PER_LINE),
    def(Property::StrokeWidths, "strokeWidths", ValueKind::FloatList).max_len(MAX_POINTS_PER_LINE),
    def(Property::IsUvModeStretch, "isUVModeStretch", ValueKind::Bool),
    // Shape, Box and Sphere
    def(Property::Shape, "shape", ValueKind::String),
    // Material
    def(Property::MaterialUrl, "materialURL", ValueKind::String),
    def(Property::MaterialMappingMode, "materialMappingMode", ValueKind::U32).range(0.0, 1.0),
    def(Property::MaterialPriority, "priority", ValueKind::U16),
    def(Property::ParentMaterialName, "parentMaterialName", ValueKind::String),
    def(Property::MaterialMappingPos, "materialMappingPos", ValueKind::Vec2),
    def(Property::MaterialMappingScale, "materialMappingScale", ValueKind::Vec2),
    def(Property::MaterialMappingRot, "materialMappingRot", ValueKind::F32).range(-360.0, 360.0),
    def(Property::MaterialData, "materialData", ValueKind::String),
    // Image
    def(Property::ImageUrl, "imageURL", ValueKind::String),
    def(Property::Emissive, "emissive", ValueKind::Bool),
    def(Property::KeepAspectRatio, "keepAspectRatio", ValueKind::Bool),
    def(Property::SubImage, "subImage", ValueKind::Vec4),
    // Grid
    def(Property::FollowCamera, "followCamera", ValueKind::Bool),
    def(Property::MajorGridEvery, "majorGridEvery", ValueKind::U32).range(1.0, 1_000_000.0),
    def(Property::MinorGridEvery, "minorGridEvery", ValueKind::F32).range(0.001, 1_000_000.0),
    // Gizmo
    def(Property::GizmoType, "gizmoType", ValueKind::U8).range(0.0, 0.0),
    def(Property::RingStartAngle, "ring.startAngle", ValueKind::F32)
        .range(0.0, 360.0)
        .group(GroupKind::Ring),
    def(Property::RingEndAngle, "ring.endAngle", ValueKind::F32)
        .range(0.0, 360.0)
        .group(GroupKind::Ring),
    def(Property::RingInnerRadius, "ring.innerRadius", ValueKind::F32)
        .range(0.0, 1.0)
        .group(GroupKind::Ring),
    def(Property::RingInnerStartColor, "ring.innerStartColor", ValueKind::Color)
        .group(GroupKind::Ring),
    def(Property::RingInnerEndColor, "ring.innerEndColor", ValueKind::Color).group(GroupKind::Ring),
    def(Property::RingOuterStartColor, "ring.outerStartColor", ValueKind::Color)
        .group(GroupKind::Ring),
    def(Property::RingOuterEndColor, "ring.outerEndColor", ValueKind::Color).group(GroupKind::Ring),
    def(Property::RingInnerStartAlpha, "ring.innerStartAlpha", ValueKind::F32)
        .range(0.0, 1.0)
        .group(GroupKind::Ring),
    def(Property::RingInnerEndAlpha, "ring.innerEndAlpha", ValueKind::F32)
        .range(0.0, 1.0)
        .group(GroupKind::Ring),
    def(Property::RingOuterStartAlpha, "ring.outerStartAlpha", ValueKind::F32)
        .range(0.0, 1.0)
        .group(GroupKind::Ring),
    def(Property::RingOuterEndAlpha, "ring.outerEndAlpha", ValueKind::F32)
        .range(0.0, 1.0)
        .group(GroupKind::Ring),
    def(Property::RingHasTickMarks, "ring.hasTickMarks", ValueKind::Bool).group(GroupKind::Ring),
    def(Property::RingMajorTickMarksAngle, "ring.majorTickMarksAngle", ValueKind::F32)
        .range(0.0, 360.0)
        .group(GroupKind::Ring),
    def(Property::RingMinorTickMarksAngle, "ring.minorTickMarksAngle", ValueKind::F32)
        .range(0.0, 360.0)
        .group(GroupKind::Ring),
    def(Property::RingMajorTickMarksLength, "ring.majorTickMarksLength", ValueKind::F32)
        .group(GroupKind::Ring),
    def(Property::RingMinorTickMarksLength, "ring.minorTickMarksLength", ValueKind::F32)
        .group(GroupKind::Ring),
    def(Property::RingMajorTickMarksColor, "ring.majorTickMarksColor", ValueKind::Color)
        .group(GroupKind::Ring),
    def(Property::RingMinorTickMarksColor, "ring.minorTickMarksColor", ValueKind::Color)
        .group(GroupKind::Ring),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_index_equals_ordinal() {
        for (index, def) in PROPERTIES.iter().enumerate() {
            assert_eq!(usize::from(def.ordinal()), index, "{}", def.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for def in &PROPERTIES {
            assert!(seen.insert(def.name), "duplicate name {}", def.name);
        }
    }

    #[test]
    fn ranges_are_ordered() {
        for def in &PROPERTIES {
            if let Some(range) = def.range {
                assert!(range.min <= range.max, "{}", def.name);
                assert!(def.kind.is_numeric(), "{} has a range", def.name);
            }
        }
    }

    #[test]
    fn max_len_only_on_lists() {
        for def in &PROPERTIES {
            if def.max_len.is_some() {
                assert!(def.kind.is_list(), "{}", def.name);
            }
        }
    }

    #[test]
    fn group_members_are_prefixed() {
        for def in PROPERTIES.iter().filter(|def| def.group.is_some()) {
            let group = def.group.unwrap();
            if group.mode_property() == Some(def.property) {
                assert!(!def.name.contains('.'), "{}", def.name);
            } else {
                assert!(
                    def.name.starts_with(group.name()),
                    "{} not under {}",
                    def.name,
                    group.name()
                );
                assert_eq!(def.name.as_bytes()[group.name().len()], b'.');
            }
        }
    }

    #[test]
    fn short_name_strips_group() {
        assert_eq!(Property::HazeRange.def().short_name(), "hazeRange");
        assert_eq!(Property::Intensity.def().short_name(), "intensity");
    }

    #[test]
    fn line_points_capped() {
        assert_eq!(
            Property::LinePoints.def().max_len,
            Some(MAX_POINTS_PER_LINE)
        );
        assert_eq!(MAX_POINTS_PER_LINE, 70);
    }
}
