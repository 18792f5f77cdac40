//! Property ordinals.
//!
//! The discriminant of each variant is its wire ordinal. Ordinals are dense
//! and ascending order is the canonical encode/decode order.

use crate::table::{PropertyDef, PROPERTIES};

/// A property ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Property {
    // Core
    /// Simulation owner ID plus priority byte.
    SimulationOwner,
    ParentId,
    ParentJointIndex,
    Visible,
    Name,
    Locked,
    UserData,
    Href,
    Description,
    Position,
    Dimensions,
    Rotation,
    RegistrationPoint,
    LastEditedBy,
    QueryAaCube,
    CanCastShadow,
    Color,
    Alpha,

    // Physics
    Density,
    Velocity,
    AngularVelocity,
    Gravity,
    Acceleration,
    Damping,
    AngularDamping,
    Restitution,
    Friction,
    /// Seconds to live; negative means immortal.
    Lifetime,
    Collisionless,
    CollisionMask,
    Dynamic,
    CollisionSoundUrl,
    ActionData,

    // Cloning
    Cloneable,
    CloneLifetime,
    CloneLimit,
    CloneDynamic,
    CloneAvatarEntity,
    CloneOriginId,

    // Scripts
    Script,
    ScriptTimestamp,
    ServerScripts,

    // Certification
    ItemName,
    ItemDescription,
    ItemCategories,
    ItemArtist,
    ItemLicense,
    LimitedRun,
    MarketplaceId,
    EditionNumber,
    EntityInstanceNumber,
    CertificateId,
    StaticCertificateVersion,

    // Grab group, common to every type
    GrabGrabbable,
    GrabKinematic,
    GrabFollowsController,
    GrabTriggerable,
    GrabEquippable,
    GrabLeftEquippablePosition,
    GrabLeftEquippableRotation,
    GrabRightEquippablePosition,
    GrabRightEquippableRotation,
    GrabEquippableIndicatorUrl,
    GrabEquippableIndicatorScale,
    GrabEquippableIndicatorOffset,

    // Shared by several types
    /// Collision shape ordinal.
    ShapeType,
    CompoundShapeUrl,
    Textures,
    PulseMin,
    PulseMax,
    PulsePeriod,
    PulseColorMode,
    PulseAlphaMode,

    // ParticleEffect
    IsEmitting,
    MaxParticles,
    Lifespan,
    EmitRate,
    EmitSpeed,
    SpeedSpread,
    EmitOrientation,
    EmitDimensions,
    EmitRadiusStart,
    PolarStart,
    PolarFinish,
    AzimuthStart,
    AzimuthFinish,
    EmitAcceleration,
    AccelerationSpread,
    ParticleRadius,
    RadiusSpread,
    RadiusStart,
    RadiusFinish,
    ColorSpread,
    ColorStart,
    ColorFinish,
    AlphaSpread,
    AlphaStart,
    AlphaFinish,
    EmitterShouldTrail,
    ParticleSpin,
    SpinSpread,
    SpinStart,
    SpinFinish,
    RotateWithEntity,

    // Model
    ModelUrl,
    JointRotationsSet,
    JointRotations,
    JointTranslationsSet,
    JointTranslations,
    RelayParentJoints,
    AnimationUrl,
    AnimationAllowTranslation,
    AnimationFps,
    AnimationCurrentFrame,
    AnimationRunning,
    AnimationLoop,
    AnimationFirstFrame,
    AnimationLastFrame,
    AnimationHold,

    // Light
    IsSpotlight,
    Intensity,
    FalloffRadius,
    Exponent,
    /// Spotlight cone half-angle in radians.
    Cutoff,

    // Text
    Text,
    LineHeight,
    TextColor,
    TextAlpha,
    BackgroundColor,
    BackgroundAlpha,
    LeftMargin,
    RightMargin,
    TopMargin,
    BottomMargin,
    FaceCamera,

    // Zone
    KeyLightMode,
    KeyLightColor,
    KeyLightIntensity,
    KeyLightDirection,
    KeyLightCastShadows,
    AmbientLightMode,
    AmbientLightIntensity,
    AmbientLightUrl,
    SkyboxMode,
    SkyboxColor,
    SkyboxUrl,
    HazeMode,
    HazeRange,
    HazeColor,
    HazeGlareColor,
    HazeEnableGlare,
    HazeGlareAngle,
    HazeAltitudeEffect,
    HazeCeiling,
    HazeBaseRef,
    HazeBackgroundBlend,
    HazeAttenuateKeyLight,
    HazeKeyLightRange,
    HazeKeyLightAltitude,
    BloomMode,
    BloomIntensity,
    BloomThreshold,
    BloomSize,
    FlyingAllowed,
    GhostingAllowed,
    FilterUrl,

    // PolyVox
    VoxelVolumeSize,
    VoxelData,
    VoxelSurfaceStyle,
    XTextureUrl,
    YTextureUrl,
    ZTextureUrl,
    XNNeighborId,
    YNNeighborId,
    ZNNeighborId,
    XPNeighborId,
    YPNeighborId,
    ZPNeighborId,

    // Web
    SourceUrl,
    Dpi,

    // Line and PolyLine
    LineWidth,
    LinePoints,
    Normals,
    StrokeColors,
    StrokeWidths,
    IsUvModeStretch,

    // Shape, Box and Sphere
    /// Primitive name such as "Cube" or "Sphere".
    Shape,

    // Material
    MaterialUrl,
    MaterialMappingMode,
    MaterialPriority,
    ParentMaterialName,
    MaterialMappingPos,
    MaterialMappingScale,
    MaterialMappingRot,
    MaterialData,

    // Image
    ImageUrl,
    Emissive,
    KeepAspectRatio,
    SubImage,

    // Grid
    FollowCamera,
    MajorGridEvery,
    MinorGridEvery,

    // Gizmo
    GizmoType,
    RingStartAngle,
    RingEndAngle,
    RingInnerRadius,
    RingInnerStartColor,
    RingInnerEndColor,
    RingOuterStartColor,
    RingOuterEndColor,
    RingInnerStartAlpha,
    RingInnerEndAlpha,
    RingOuterStartAlpha,
    RingOuterEndAlpha,
    RingHasTickMarks,
    RingMajorTickMarksAngle,
    RingMinorTickMarksAngle,
    RingMajorTickMarksLength,
    RingMinorTickMarksLength,
    RingMajorTickMarksColor,
    RingMinorTickMarksColor,
}

impl Property {
    /// Number of defined properties.
    pub const COUNT: usize = 221;

    /// Returns the wire ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u16 {
        self as u16
    }

    /// Returns the property with the given ordinal, if defined.
    #[must_use]
    pub fn from_ordinal(ordinal: u16) -> Option<Self> {
        PROPERTIES.get(usize::from(ordinal)).map(|def| def.property)
    }

    /// Returns the table entry for this property.
    #[must_use]
    pub fn def(self) -> &'static PropertyDef {
        &PROPERTIES[usize::from(self.ordinal())]
    }

    /// Returns the registry name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Iterates every property in canonical order.
    pub fn all() -> impl Iterator<Item = Self> {
        PROPERTIES.iter().map(|def| def.property)
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
