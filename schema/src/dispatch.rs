//! Type dispatcher: which properties each entity type carries.
//!
//! Every type carries the common set (core through grab). Extras are listed
//! as contiguous ordinal spans so the table order stays the single source of
//! truth for encode and decode order.

use crate::entity_type::EntityType;
use crate::error::{SchemaError, SchemaResult};
use crate::flags::PropertyFlags;
use crate::property::Property;

type Span = (Property, Property);

const COMMON: Span = (Property::SimulationOwner, Property::GrabEquippableIndicatorOffset);

const SHAPE_INFO: Span = (Property::ShapeType, Property::CompoundShapeUrl);
const TEXTURES: Span = (Property::Textures, Property::Textures);
const PULSE: Span = (Property::PulseMin, Property::PulseAlphaMode);
const PARTICLE: Span = (Property::IsEmitting, Property::RotateWithEntity);
const MODEL_AND_ANIMATION: Span = (Property::ModelUrl, Property::AnimationHold);
const LIGHT: Span = (Property::IsSpotlight, Property::Cutoff);
const TEXT: Span = (Property::Text, Property::FaceCamera);
const ZONE: Span = (Property::KeyLightMode, Property::FilterUrl);
const POLYVOX: Span = (Property::VoxelVolumeSize, Property::ZPNeighborId);
const WEB: Span = (Property::SourceUrl, Property::Dpi);
const LINE: Span = (Property::LineWidth, Property::LinePoints);
const POLYLINE: Span = (Property::Normals, Property::IsUvModeStretch);
const SHAPE: Span = (Property::Shape, Property::Shape);
const MATERIAL: Span = (Property::MaterialUrl, Property::MaterialData);
const IMAGE: Span = (Property::ImageUrl, Property::SubImage);
const GRID: Span = (Property::FollowCamera, Property::MinorGridEvery);
const GIZMO: Span = (Property::GizmoType, Property::RingMinorTickMarksColor);

fn extra_spans(entity_type: EntityType) -> &'static [Span] {
    match entity_type.base_type() {
        EntityType::Unknown => &[],
        EntityType::Model => &[SHAPE_INFO, TEXTURES, MODEL_AND_ANIMATION],
        EntityType::ParticleEffect => &[SHAPE_INFO, TEXTURES, PARTICLE],
        EntityType::Zone => &[SHAPE_INFO, ZONE],
        EntityType::Light => &[LIGHT],
        EntityType::Text => &[PULSE, TEXT],
        EntityType::Line => &[LINE],
        EntityType::PolyLine => &[TEXTURES, LINE, POLYLINE],
        EntityType::PolyVox => &[POLYVOX],
        EntityType::Web => &[PULSE, WEB],
        EntityType::Material => &[MATERIAL],
        EntityType::Image => &[PULSE, IMAGE],
        EntityType::Grid => &[PULSE, GRID],
        EntityType::Gizmo => &[GIZMO],
        EntityType::Shape | EntityType::Box | EntityType::Sphere => &[PULSE, SHAPE],
    }
}

fn span(span: Span) -> impl Iterator<Item = Property> {
    (span.0.ordinal()..=span.1.ordinal()).filter_map(Property::from_ordinal)
}

/// Properties carried by every entity type: core, physics, cloning,
/// scripts, certification and grab.
#[must_use]
pub fn common_properties() -> PropertyFlags {
    span(COMMON).collect()
}

/// Extra properties for `entity_type`, in ascending ordinal order.
///
/// `Box` and `Sphere` share `Shape`'s extras, including the shape name.
#[must_use]
pub fn extra_properties(entity_type: EntityType) -> Vec<Property> {
    extra_spans(entity_type)
        .iter()
        .flat_map(|&extra| span(extra))
        .collect()
}

/// Common plus extra properties for `entity_type`.
///
/// Computed from the spans; [`registry`](crate::registry) caches the result.
#[must_use]
pub fn legal_properties(entity_type: EntityType) -> PropertyFlags {
    let mut flags = common_properties();
    flags.extend(extra_properties(entity_type));
    flags
}

/// Members of `flags` that are extras of `entity_type`.
#[must_use]
pub fn extra_properties_present(entity_type: EntityType, flags: &PropertyFlags) -> PropertyFlags {
    let extras: PropertyFlags = extra_properties(entity_type).into_iter().collect();
    flags.intersection(&extras)
}

/// Checks that every member of `flags` is legal for `entity_type`.
///
/// # Errors
///
/// Returns [`SchemaError::IllegalProperty`] naming the lowest illegal ordinal.
pub fn validate_flags(entity_type: EntityType, flags: &PropertyFlags) -> SchemaResult<()> {
    let legal = crate::registry().legal_for(entity_type);
    match flags.difference(&legal).iter().next() {
        Some(property) => Err(SchemaError::IllegalProperty {
            entity_type,
            property,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_set_boundaries() {
        let common = common_properties();
        assert!(common.test(Property::SimulationOwner));
        assert!(common.test(Property::StaticCertificateVersion));
        assert!(common.test(Property::GrabEquippableIndicatorOffset));
        assert!(!common.test(Property::ShapeType));
        assert_eq!(common.highest(), Some(Property::GrabEquippableIndicatorOffset));
    }

    #[test]
    fn extras_are_ascending_and_disjoint_from_common() {
        let common = common_properties();
        for entity_type in EntityType::ALL {
            let extras = extra_properties(entity_type);
            assert!(extras.windows(2).all(|w| w[0] < w[1]), "{entity_type}");
            assert!(extras.iter().all(|p| !common.test(*p)), "{entity_type}");
        }
    }

    #[test]
    fn unknown_has_no_extras() {
        assert!(extra_properties(EntityType::Unknown).is_empty());
        assert_eq!(legal_properties(EntityType::Unknown), common_properties());
    }

    #[test]
    fn light_extras() {
        assert_eq!(
            extra_properties(EntityType::Light),
            vec![
                Property::IsSpotlight,
                Property::Intensity,
                Property::FalloffRadius,
                Property::Exponent,
                Property::Cutoff,
            ]
        );
    }

    #[test]
    fn aliases_share_shape_extras() {
        let shape = extra_properties(EntityType::Shape);
        assert!(shape.contains(&Property::Shape));
        assert_eq!(extra_properties(EntityType::Box), shape);
        assert_eq!(extra_properties(EntityType::Sphere), shape);
    }

    #[test]
    fn zone_carries_every_component_group() {
        let zone = legal_properties(EntityType::Zone);
        for property in [
            Property::KeyLightMode,
            Property::AmbientLightUrl,
            Property::SkyboxColor,
            Property::HazeKeyLightAltitude,
            Property::BloomSize,
            Property::FilterUrl,
        ] {
            assert!(zone.test(property), "{property}");
        }
        assert!(!zone.test(Property::PulseMin));
    }

    #[test]
    fn textures_belong_to_model_particles_and_polyline() {
        let zone = legal_properties(EntityType::Zone);
        assert!(zone.test(Property::ShapeType));
        assert!(zone.test(Property::CompoundShapeUrl));
        assert!(!zone.test(Property::Textures));
        for entity_type in [EntityType::Model, EntityType::ParticleEffect, EntityType::PolyLine] {
            assert!(legal_properties(entity_type).test(Property::Textures), "{entity_type}");
        }
    }

    #[test]
    fn polyline_has_line_points_and_textures() {
        let extras = extra_properties(EntityType::PolyLine);
        assert_eq!(extras[0], Property::Textures);
        assert!(extras.contains(&Property::LinePoints));
        assert!(extras.contains(&Property::StrokeWidths));
        assert!(!extras.contains(&Property::ShapeType));
    }

    #[test]
    fn extras_present_filters_common() {
        let flags: PropertyFlags = [Property::Position, Property::Intensity].into_iter().collect();
        let present = extra_properties_present(EntityType::Light, &flags);
        assert_eq!(present.iter().collect::<Vec<_>>(), vec![Property::Intensity]);
    }

    #[test]
    fn validate_reports_lowest_illegal() {
        let flags: PropertyFlags = [Property::Intensity, Property::LinePoints, Property::Text]
            .into_iter()
            .collect();
        let err = validate_flags(EntityType::Light, &flags).unwrap_err();
        assert_eq!(
            err,
            SchemaError::IllegalProperty {
                entity_type: EntityType::Light,
                property: Property::Text
            }
        );
        let ok: PropertyFlags = [Property::Color, Property::Intensity].into_iter().collect();
        assert!(validate_flags(EntityType::Light, &ok).is_ok());
    }
}
