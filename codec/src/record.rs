//! Entity records: property values, change tracking and merge.

use std::collections::BTreeMap;

use glam::{Quat, Vec3};
use schema::{registry, EntityType, GroupKind, Property, PropertyFlags};
use uuid::Uuid;

use crate::defaults::default_value;
use crate::error::CodecResult;
use crate::group::PropertyGroup;
use crate::types::{usecs_now, EntityId};
use crate::value::{normalize_for, Color, PropertyValue};

/// One entity's property values with per-property changed flags.
///
/// A record holds exactly the properties legal for its base type. Grouped
/// properties live in nested [`PropertyGroup`]s that track their own changes.
/// `Box` and `Sphere` are stored as `Shape` records. The visible type is
/// fixed at construction and follows the shape name only when `shape` is
/// assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    base_type: EntityType,
    visible_type: EntityType,
    legal: PropertyFlags,
    values: BTreeMap<Property, PropertyValue>,
    changed: PropertyFlags,
    groups: BTreeMap<GroupKind, PropertyGroup>,
    created: u64,
    last_edited: u64,
    desired: PropertyFlags,
    default_settings: bool,
    natural_dimensions: Vec3,
}

impl EntityRecord {
    /// Creates a record with every legal property at its default.
    ///
    /// `desired` is the caller's property mask for read paths; an empty mask
    /// means all properties.
    #[must_use]
    pub fn new(entity_type: EntityType, desired: PropertyFlags) -> Self {
        let base_type = entity_type.base_type();
        let legal = registry().legal_for(base_type);
        let mut values = BTreeMap::new();
        let mut groups = BTreeMap::new();
        for property in legal.iter() {
            match registry().def(property).group {
                Some(kind) => {
                    groups.entry(kind).or_insert_with(|| PropertyGroup::new(kind));
                }
                None => {
                    values.insert(property, default_value(property));
                }
            }
        }
        if let Some(shape) = entity_type.forced_shape() {
            values.insert(Property::Shape, PropertyValue::String(shape.to_owned()));
        }
        Self {
            base_type,
            visible_type: entity_type,
            legal,
            values,
            changed: PropertyFlags::new(),
            groups,
            created: 0,
            last_edited: 0,
            desired,
            default_settings: true,
            natural_dimensions: Vec3::ONE,
        }
    }

    /// The visible type: the type the record was built as, until a shape
    /// assignment turns it into `Box`, `Sphere` or `Shape`.
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        self.visible_type
    }

    fn follow_shape(&mut self) {
        if self.base_type.is_shape_family() {
            self.visible_type = EntityType::from_shape_name(self.shape());
        }
    }

    /// The stored type, `Shape` for the whole shape family.
    #[must_use]
    pub const fn base_type(&self) -> EntityType {
        self.base_type
    }

    /// Returns `true` if this record's type carries `property`.
    #[must_use]
    pub const fn holds(&self, property: Property) -> bool {
        self.legal.test(property)
    }

    /// Every property this record carries.
    #[must_use]
    pub const fn legal_properties(&self) -> PropertyFlags {
        self.legal
    }

    /// Returns the value of `property`, or `None` if this type does not hold it.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<&PropertyValue> {
        match registry().def(property).group {
            Some(kind) => self.groups.get(&kind)?.get(property),
            None => self.values.get(&property),
        }
    }

    /// Returns the group of `kind` if this record carries it.
    #[must_use]
    pub fn group(&self, kind: GroupKind) -> Option<&PropertyGroup> {
        self.groups.get(&kind)
    }

    /// Mutable access to a carried group.
    ///
    /// Writes through the group do not clear the default-settings marker.
    pub fn group_mut(&mut self, kind: GroupKind) -> Option<&mut PropertyGroup> {
        self.groups.get_mut(&kind)
    }

    /// Held properties and their values in ascending ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &PropertyValue)> + '_ {
        self.legal
            .iter()
            .filter_map(move |property| self.get(property).map(|value| (property, value)))
    }

    /// Assigns `property`, clamping numeric values to the property's range,
    /// and marks it changed.
    ///
    /// Returns `Ok(false)` and leaves the record untouched if this type does
    /// not hold the property or a list value is longer than allowed.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TypeMismatch`](crate::CodecError::TypeMismatch)
    /// for a value of the wrong kind and
    /// [`CodecError::ValueTooLong`](crate::CodecError::ValueTooLong) for a
    /// string, blob or list that cannot be length-prefixed.
    pub fn set(&mut self, property: Property, value: PropertyValue) -> CodecResult<bool> {
        if !self.holds(property) {
            return Ok(false);
        }
        let def = registry().def(property);
        let assigned = match def.group {
            Some(kind) => match self.groups.get_mut(&kind) {
                Some(group) => group.set(property, value)?,
                None => false,
            },
            None => match normalize_for(def, value)? {
                Some(value) => {
                    self.values.insert(property, value);
                    self.changed.set(property);
                    true
                }
                None => false,
            },
        };
        if assigned {
            self.default_settings = false;
            if property == Property::Shape {
                self.follow_shape();
            }
        }
        Ok(assigned)
    }

    fn set_quiet(&mut self, property: Property, value: PropertyValue) -> bool {
        matches!(self.set(property, value), Ok(true))
    }

    fn f32_of(&self, property: Property) -> f32 {
        self.get(property)
            .and_then(PropertyValue::as_f32)
            .unwrap_or_default()
    }

    fn bool_of(&self, property: Property) -> bool {
        self.get(property)
            .and_then(PropertyValue::as_bool)
            .unwrap_or_default()
    }

    fn vec3_of(&self, property: Property) -> Vec3 {
        self.get(property)
            .and_then(PropertyValue::as_vec3)
            .unwrap_or_default()
    }

    fn str_of(&self, property: Property) -> &str {
        self.get(property)
            .and_then(PropertyValue::as_str)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.str_of(Property::Name)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        self.set_quiet(Property::Name, PropertyValue::String(name.into()))
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.vec3_of(Property::Position)
    }

    pub fn set_position(&mut self, position: Vec3) -> bool {
        self.set_quiet(Property::Position, PropertyValue::Vec3(position))
    }

    #[must_use]
    pub fn dimensions(&self) -> Vec3 {
        self.vec3_of(Property::Dimensions)
    }

    pub fn set_dimensions(&mut self, dimensions: Vec3) -> bool {
        self.set_quiet(Property::Dimensions, PropertyValue::Vec3(dimensions))
    }

    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.get(Property::Rotation)
            .and_then(PropertyValue::as_quat)
            .unwrap_or(Quat::IDENTITY)
    }

    pub fn set_rotation(&mut self, rotation: Quat) -> bool {
        self.set_quiet(Property::Rotation, PropertyValue::Quat(rotation))
    }

    #[must_use]
    pub fn registration_point(&self) -> Vec3 {
        self.vec3_of(Property::RegistrationPoint)
    }

    pub fn set_registration_point(&mut self, point: Vec3) -> bool {
        self.set_quiet(Property::RegistrationPoint, PropertyValue::Vec3(point))
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.get(Property::Color)
            .and_then(PropertyValue::as_color)
            .unwrap_or_default()
    }

    pub fn set_color(&mut self, color: Color) -> bool {
        self.set_quiet(Property::Color, PropertyValue::Color(color))
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.f32_of(Property::Alpha)
    }

    pub fn set_alpha(&mut self, alpha: f32) -> bool {
        self.set_quiet(Property::Alpha, PropertyValue::F32(alpha))
    }

    #[must_use]
    pub fn locked(&self) -> bool {
        self.bool_of(Property::Locked)
    }

    pub fn set_locked(&mut self, locked: bool) -> bool {
        self.set_quiet(Property::Locked, PropertyValue::Bool(locked))
    }

    #[must_use]
    pub fn lifetime(&self) -> f32 {
        self.f32_of(Property::Lifetime)
    }

    pub fn set_lifetime(&mut self, lifetime: f32) -> bool {
        self.set_quiet(Property::Lifetime, PropertyValue::F32(lifetime))
    }

    #[must_use]
    pub fn parent_id(&self) -> Uuid {
        self.get(Property::ParentId)
            .and_then(PropertyValue::as_uuid)
            .unwrap_or_default()
    }

    pub fn set_parent_id(&mut self, parent: Uuid) -> bool {
        self.set_quiet(Property::ParentId, PropertyValue::Uuid(parent))
    }

    /// Light intensity; zero for types without one.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.f32_of(Property::Intensity)
    }

    pub fn set_intensity(&mut self, intensity: f32) -> bool {
        self.set_quiet(Property::Intensity, PropertyValue::F32(intensity))
    }

    #[must_use]
    pub fn falloff_radius(&self) -> f32 {
        self.f32_of(Property::FalloffRadius)
    }

    pub fn set_falloff_radius(&mut self, radius: f32) -> bool {
        self.set_quiet(Property::FalloffRadius, PropertyValue::F32(radius))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.str_of(Property::Text)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.set_quiet(Property::Text, PropertyValue::String(text.into()))
    }

    /// The shape name of a shape-family record, empty otherwise.
    #[must_use]
    pub fn shape(&self) -> &str {
        self.str_of(Property::Shape)
    }

    /// Sets the shape name. `Cube` and `Sphere` change the visible type.
    pub fn set_shape(&mut self, shape: impl Into<String>) -> bool {
        self.set_quiet(Property::Shape, PropertyValue::String(shape.into()))
    }

    #[must_use]
    pub fn line_points(&self) -> &[Vec3] {
        self.get(Property::LinePoints)
            .and_then(PropertyValue::as_vec3_list)
            .unwrap_or_default()
    }

    /// Sets the line points. More than the per-line maximum is refused.
    pub fn set_line_points(&mut self, points: Vec<Vec3>) -> bool {
        self.set_quiet(Property::LinePoints, PropertyValue::Vec3List(points))
    }

    #[must_use]
    pub const fn created(&self) -> u64 {
        self.created
    }

    pub fn set_created(&mut self, created: u64) {
        self.created = created;
        self.last_edited = self.last_edited.max(created);
    }

    #[must_use]
    pub const fn last_edited(&self) -> u64 {
        self.last_edited
    }

    /// Sets the last-edited time, never earlier than the creation time.
    pub fn set_last_edited(&mut self, last_edited: u64) {
        self.last_edited = last_edited.max(self.created);
    }

    #[must_use]
    pub const fn desired_properties(&self) -> PropertyFlags {
        self.desired
    }

    pub fn set_desired_properties(&mut self, desired: PropertyFlags) {
        self.desired = desired;
    }

    /// `true` until the first successful setter call.
    #[must_use]
    pub const fn has_default_settings(&self) -> bool {
        self.default_settings
    }

    /// Every property whose changed flag is set, including group members.
    #[must_use]
    pub fn get_changed(&self) -> PropertyFlags {
        self.groups
            .values()
            .fold(self.changed, |acc, group| acc.union(&group.get_changed()))
    }

    /// Copies every property `other` has changed that this record holds.
    ///
    /// Copied properties are marked changed. The last-edited time advances to
    /// the later of the two, never earlier than this record's creation time.
    /// Later merges win, so apply them in arrival order.
    pub fn merge(&mut self, other: &Self) {
        let mut copied = false;
        for property in other.changed.iter() {
            if !self.holds(property) {
                continue;
            }
            if let Some(value) = other.values.get(&property) {
                self.values.insert(property, value.clone());
                self.changed.set(property);
                copied = true;
            }
        }
        if other.changed.test(Property::Shape) && self.holds(Property::Shape) {
            self.follow_shape();
        }
        for (kind, theirs) in &other.groups {
            if let Some(ours) = self.groups.get_mut(kind) {
                copied |= ours.merge(theirs);
            }
        }
        if copied {
            self.default_settings = false;
        }
        self.last_edited = self.last_edited.max(other.last_edited).max(self.created);
    }

    /// Marks every held property changed, for a full resend.
    pub fn mark_all_changed(&mut self) {
        self.changed = self.values.keys().copied().collect();
        for group in self.groups.values_mut() {
            group.mark_all_changed();
        }
    }

    pub fn clear_changed(&mut self) {
        self.changed = PropertyFlags::new();
        for group in self.groups.values_mut() {
            group.clear_changed();
        }
    }

    /// Registry names of the changed properties, in ordinal order.
    #[must_use]
    pub fn list_changed_property_names(&self) -> Vec<&'static str> {
        registry().names(&self.get_changed())
    }

    /// A copy holding only the values in `flags`, with exactly those marked
    /// changed. Everything else is at its default.
    #[must_use]
    pub fn restricted(&self, flags: &PropertyFlags) -> Self {
        let mut out = Self::new(self.entity_type(), self.desired);
        for property in flags.intersection(&self.legal).iter() {
            if let Some(value) = self.get(property) {
                out.store(property, value.clone());
            }
        }
        out.visible_type = self.visible_type;
        out.created = self.created;
        out.last_edited = self.last_edited;
        out.default_settings = self.default_settings;
        out.natural_dimensions = self.natural_dimensions;
        out
    }

    // Stores an already normalized value and marks it changed.
    fn store(&mut self, property: Property, value: PropertyValue) {
        match registry().def(property).group {
            Some(kind) => {
                if let Some(group) = self.groups.get_mut(&kind) {
                    group.store(property, value);
                }
            }
            None => {
                self.values.insert(property, value);
                self.changed.set(property);
            }
        }
    }

    /// Axis-aligned bounds `(min, max)` in world space.
    ///
    /// Derived from position, dimensions, rotation and registration point.
    #[must_use]
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let dimensions = self.dimensions();
        let local_min = -dimensions * self.registration_point();
        let local_max = local_min + dimensions;
        let rotation = self.rotation();
        let position = self.position();

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner in 0..8u8 {
            let local = Vec3::new(
                if corner & 1 == 0 { local_min.x } else { local_max.x },
                if corner & 2 == 0 { local_min.y } else { local_max.y },
                if corner & 4 == 0 { local_min.z } else { local_max.z },
            );
            let world = position + rotation * local;
            min = min.min(world);
            max = max.max(world);
        }
        (min, max)
    }

    /// Locally supplied natural size, for example of a loaded model.
    #[must_use]
    pub const fn natural_dimensions(&self) -> Vec3 {
        self.natural_dimensions
    }

    pub fn set_natural_dimensions(&mut self, dimensions: Vec3) {
        self.natural_dimensions = dimensions;
    }

    /// Builds the record of a clone of this entity.
    ///
    /// The clone gets a suffixed name, is unlocked and unparented, takes its
    /// lifetime and dynamic flag from the clone settings, and records
    /// `source_id` as its origin. Clone settings return to their defaults and
    /// every property is marked changed.
    #[must_use]
    pub fn convert_to_clone(&self, source_id: EntityId, new_id: EntityId) -> Self {
        let mut clone = self.clone();
        let name = format!("{}-clone-{source_id}", self.name());
        clone.set_name(name);
        clone.set_locked(false);
        clone.set_parent_id(Uuid::nil());
        clone.set_quiet(
            Property::ParentJointIndex,
            default_value(Property::ParentJointIndex),
        );
        clone.set_lifetime(self.f32_of(Property::CloneLifetime));
        clone.set_quiet(
            Property::Dynamic,
            PropertyValue::Bool(self.bool_of(Property::CloneDynamic)),
        );

        let now = usecs_now();
        clone.created = now;
        clone.last_edited = now;

        for property in [
            Property::Cloneable,
            Property::CloneLifetime,
            Property::CloneLimit,
            Property::CloneDynamic,
            Property::CloneAvatarEntity,
        ] {
            clone.set_quiet(property, default_value(property));
        }
        clone.set_quiet(Property::CloneOriginId, PropertyValue::Uuid(source_id.raw()));
        clone.mark_all_changed();
        clone
    }
}

/// The changed properties of `record` that are extras of `entity_type`.
#[must_use]
pub fn extra_properties_present(entity_type: EntityType, record: &EntityRecord) -> PropertyFlags {
    schema::extra_properties_present(entity_type, &record.get_changed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> EntityRecord {
        EntityRecord::new(EntityType::Light, PropertyFlags::new())
    }

    #[test]
    fn new_record_holds_defaults_unchanged() {
        let record = light();
        assert_eq!(record.intensity(), 1.0);
        assert_eq!(record.dimensions(), Vec3::splat(0.1));
        assert!(record.get_changed().is_empty());
        assert!(record.has_default_settings());
        assert!(record.get(Property::Text).is_none());
    }

    #[test]
    fn set_marks_changed_and_clears_default_settings() {
        let mut record = light();
        assert!(record.set_intensity(5.0));
        let changed: Vec<_> = record.get_changed().iter().collect();
        assert_eq!(changed, vec![Property::Intensity]);
        assert!(!record.has_default_settings());
    }

    #[test]
    fn set_refuses_properties_the_type_lacks() {
        let mut record = light();
        let assigned = record
            .set(Property::Text, PropertyValue::String("hi".into()))
            .unwrap();
        assert!(!assigned);
        assert!(record.get_changed().is_empty());
        assert!(record.has_default_settings());
    }

    #[test]
    fn set_clamps_to_range() {
        let mut record = light();
        record.set_alpha(3.0);
        assert_eq!(record.alpha(), 1.0);
        record.set_dimensions(Vec3::new(0.0, 1.0, 20_000.0));
        assert_eq!(record.dimensions(), Vec3::new(0.001, 1.0, 16_384.0));
    }

    #[test]
    fn line_points_over_cap_keep_old_value() {
        let mut record = EntityRecord::new(EntityType::Line, PropertyFlags::new());
        assert!(record.set_line_points(vec![Vec3::ONE; 70]));
        record.clear_changed();
        assert!(!record.set_line_points(vec![Vec3::ZERO; 71]));
        assert_eq!(record.line_points().len(), 70);
        assert!(record.get_changed().is_empty());
    }

    #[test]
    fn shape_family_aliasing() {
        let shape = EntityRecord::new(EntityType::Shape, PropertyFlags::new());
        assert_eq!(shape.entity_type(), EntityType::Shape);
        assert_eq!(shape.shape(), "Sphere");
        let sphere = EntityRecord::new(EntityType::Sphere, PropertyFlags::new());
        assert_eq!(sphere.entity_type(), EntityType::Sphere);

        let mut record = EntityRecord::new(EntityType::Box, PropertyFlags::new());
        assert_eq!(record.base_type(), EntityType::Shape);
        assert_eq!(record.shape(), "Cube");
        assert_eq!(record.entity_type(), EntityType::Box);

        record.set_shape("Sphere");
        assert_eq!(record.entity_type(), EntityType::Sphere);
        record.set_shape("Torus");
        assert_eq!(record.entity_type(), EntityType::Shape);
    }

    #[test]
    fn group_members_contribute_to_changed() {
        let mut record = EntityRecord::new(EntityType::Zone, PropertyFlags::new());
        record
            .set(Property::HazeRange, PropertyValue::F32(50.0))
            .unwrap();
        record
            .set(Property::GrabGrabbable, PropertyValue::Bool(false))
            .unwrap();
        assert_eq!(
            record.list_changed_property_names(),
            vec!["grab.grabbable", "haze.hazeRange"]
        );
    }

    #[test]
    fn merge_copies_changed_and_advances_time() {
        let mut target = light();
        target.set_created(100);
        target.set_last_edited(200);

        let mut source = light();
        source.set_intensity(7.0);
        source.set_last_edited(500);
        target.merge(&source);

        assert_eq!(target.intensity(), 7.0);
        assert!(target.get_changed().test(Property::Intensity));
        assert_eq!(target.last_edited(), 500);
        assert_eq!(target.falloff_radius(), 0.1);
    }

    #[test]
    fn merge_floors_at_created() {
        let mut target = light();
        target.set_created(1_000);
        let mut source = light();
        source.set_last_edited(10);
        target.merge(&source);
        assert_eq!(target.last_edited(), 1_000);
    }

    #[test]
    fn merged_shape_name_changes_visible_type() {
        let mut target = EntityRecord::new(EntityType::Box, PropertyFlags::new());
        let mut edit = EntityRecord::new(EntityType::Shape, PropertyFlags::new());
        edit.set_color(Color::new(1, 2, 3));
        target.merge(&edit);
        assert_eq!(target.entity_type(), EntityType::Box);

        edit.set_shape("Sphere");
        target.merge(&edit);
        assert_eq!(target.entity_type(), EntityType::Sphere);
        assert_eq!(target.shape(), "Sphere");
    }

    #[test]
    fn restricted_keeps_visible_type() {
        let mut record = EntityRecord::new(EntityType::Shape, PropertyFlags::new());
        record.set_shape("Torus");
        let only: PropertyFlags = [Property::Color].into_iter().collect();
        let restricted = record.restricted(&only);
        assert_eq!(restricted.entity_type(), EntityType::Shape);

        let cube = EntityRecord::new(EntityType::Box, PropertyFlags::new());
        assert_eq!(cube.restricted(&only).entity_type(), EntityType::Box);
    }

    #[test]
    fn restricted_stores_group_members() {
        let mut zone = EntityRecord::new(EntityType::Zone, PropertyFlags::new());
        zone.set(Property::HazeRange, PropertyValue::F32(250.0)).unwrap();
        let only: PropertyFlags = [Property::HazeRange].into_iter().collect();
        let restricted = zone.restricted(&only);
        assert_eq!(restricted.get(Property::HazeRange), Some(&PropertyValue::F32(250.0)));
        assert_eq!(restricted.get_changed(), only);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut source = light();
        source.set_intensity(3.0);
        source.set_name("lamp");
        let mut once = light();
        once.merge(&source);
        let mut twice = once.clone();
        twice.merge(&source);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_skips_properties_target_lacks() {
        let mut text = EntityRecord::new(EntityType::Text, PropertyFlags::new());
        text.set_text("hello");
        text.set_position(Vec3::X);
        let mut target = light();
        target.merge(&text);
        assert_eq!(target.position(), Vec3::X);
        assert!(target.get(Property::Text).is_none());
    }

    #[test]
    fn mark_all_changed_covers_legal_set() {
        let mut record = EntityRecord::new(EntityType::Zone, PropertyFlags::new());
        record.mark_all_changed();
        assert_eq!(record.get_changed(), registry().legal_for(EntityType::Zone));
        record.clear_changed();
        assert!(record.get_changed().is_empty());
    }

    #[test]
    fn restricted_keeps_only_requested() {
        let mut record = light();
        record.set_intensity(9.0);
        record.set_name("lamp");
        let mut only: PropertyFlags = PropertyFlags::new();
        only.set(Property::Intensity);
        let restricted = record.restricted(&only);
        assert_eq!(restricted.intensity(), 9.0);
        assert_eq!(restricted.name(), "");
        assert_eq!(restricted.get_changed(), only);
    }

    #[test]
    fn bounding_box_default_registration_is_centered() {
        let mut record = light();
        record.set_position(Vec3::new(1.0, 2.0, 3.0));
        record.set_dimensions(Vec3::new(2.0, 4.0, 6.0));
        let (min, max) = record.bounding_box();
        assert!((min - Vec3::new(0.0, 0.0, 0.0)).length() < 1e-5);
        assert!((max - Vec3::new(2.0, 4.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn derived_views_are_not_changes() {
        let mut record = light();
        record.set_natural_dimensions(Vec3::splat(3.0));
        let _ = record.bounding_box();
        assert!(record.get_changed().is_empty());
        assert_eq!(record.natural_dimensions(), Vec3::splat(3.0));
    }

    #[test]
    fn clone_conversion() {
        let mut record = EntityRecord::new(EntityType::Box, PropertyFlags::new());
        record.set_name("crate");
        record.set_locked(true);
        record.set(Property::Cloneable, PropertyValue::Bool(true)).unwrap();
        record
            .set(Property::CloneLifetime, PropertyValue::F32(60.0))
            .unwrap();
        record
            .set(Property::CloneDynamic, PropertyValue::Bool(true))
            .unwrap();

        let source = EntityId::from_bytes([1; 16]);
        let new_id = EntityId::from_bytes([2; 16]);
        let clone = record.convert_to_clone(source, new_id);

        assert_eq!(clone.name(), format!("crate-clone-{source}"));
        assert_ne!(clone.name(), format!("crate-clone-{new_id}"));
        assert!(!clone.locked());
        assert_eq!(clone.lifetime(), 60.0);
        assert_eq!(clone.get(Property::Dynamic), Some(&PropertyValue::Bool(true)));
        assert_eq!(clone.get(Property::Cloneable), Some(&PropertyValue::Bool(false)));
        assert_eq!(
            clone.get(Property::CloneLifetime),
            Some(&PropertyValue::F32(300.0))
        );
        assert_eq!(
            clone.get(Property::CloneOriginId),
            Some(&PropertyValue::Uuid(source.raw()))
        );
        assert_eq!(clone.entity_type(), EntityType::Box);
        assert_eq!(clone.get_changed(), clone.legal_properties());
        assert!(clone.created() > 0);
    }

    #[test]
    fn extras_present_filters_common() {
        let mut record = light();
        record.set_intensity(2.0);
        record.set_position(Vec3::ONE);
        let extras = extra_properties_present(EntityType::Light, &record);
        assert_eq!(extras.iter().collect::<Vec<_>>(), vec![Property::Intensity]);
    }
}
