//! Property groups: nested bundles with their own change tracking.

use schema::{registry, ComponentMode, GroupKind, Property, PropertyFlags};

use crate::defaults::default_value;
use crate::error::CodecResult;
use crate::value::{normalize_for, PropertyValue};

/// Values and changed flags for one group's members.
///
/// Members are stored in ordinal order; a member's slot is its offset from
/// the group's first ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyGroup {
    kind: GroupKind,
    values: Vec<PropertyValue>,
    changed: PropertyFlags,
}

impl PropertyGroup {
    /// Creates a group with every member at its default, nothing changed.
    #[must_use]
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            values: kind.members().map(default_value).collect(),
            changed: PropertyFlags::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        self.kind
    }

    fn slot(&self, property: Property) -> Option<usize> {
        if !self.kind.contains(property) {
            return None;
        }
        let (first, _) = self.kind.bounds();
        Some(usize::from(property.ordinal() - first.ordinal()))
    }

    /// Returns the value of a member, or `None` for non-members.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<&PropertyValue> {
        self.slot(property).and_then(|slot| self.values.get(slot))
    }

    /// Assigns a member and marks it changed.
    ///
    /// Returns `Ok(false)` without touching anything if `property` is not a
    /// member or the value is a list longer than the member allows.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TypeMismatch`](crate::CodecError::TypeMismatch)
    /// if the value has the wrong kind.
    pub fn set(&mut self, property: Property, value: PropertyValue) -> CodecResult<bool> {
        if self.slot(property).is_none() {
            return Ok(false);
        }
        let Some(value) = normalize_for(registry().def(property), value)? else {
            return Ok(false);
        };
        self.store(property, value);
        Ok(true)
    }

    /// Stores an already normalized member value and marks it changed.
    /// Non-members are ignored.
    pub(crate) fn store(&mut self, property: Property, value: PropertyValue) {
        if let Some(slot) = self.slot(property) {
            self.values[slot] = value;
            self.changed.set(property);
        }
    }

    /// Members whose changed flag is set.
    #[must_use]
    pub const fn get_changed(&self) -> PropertyFlags {
        self.changed
    }

    pub fn mark_all_changed(&mut self) {
        self.changed = self.kind.member_flags();
    }

    pub fn clear_changed(&mut self) {
        self.changed = PropertyFlags::new();
    }

    /// Copies every member `other` has changed and marks it changed here.
    ///
    /// Returns `true` if anything was copied.
    pub fn merge(&mut self, other: &Self) -> bool {
        if other.kind != self.kind {
            return false;
        }
        for property in other.changed.iter() {
            if let (Some(slot), Some(value)) = (self.slot(property), other.get(property)) {
                self.values[slot] = value.clone();
                self.changed.set(property);
            }
        }
        !other.changed.is_empty()
    }

    /// The component mode of a zone component group.
    #[must_use]
    pub fn mode(&self) -> Option<ComponentMode> {
        let property = self.kind.mode_property()?;
        self.get(property)
            .and_then(PropertyValue::as_u8)
            .map(ComponentMode::from_raw)
    }

    /// Sets the component mode. Returns `false` for groups without a mode.
    pub fn set_mode(&mut self, mode: ComponentMode) -> bool {
        match self.kind.mode_property() {
            Some(property) => matches!(self.set(property, PropertyValue::U8(mode.raw())), Ok(true)),
            None => false,
        }
    }

    /// Members and values in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &PropertyValue)> {
        self.kind.members().zip(self.values.iter())
    }
}
