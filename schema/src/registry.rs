//! Process-wide property registry.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::dispatch::legal_properties;
use crate::entity_type::EntityType;
use crate::error::{SchemaError, SchemaResult};
use crate::flags::PropertyFlags;
use crate::property::Property;
use crate::table::{PropertyDef, PROPERTIES};

/// Name index over the property table plus cached per-type legal sets.
///
/// Built once on first use and read-only afterwards.
#[derive(Debug)]
pub struct PropertyRegistry {
    by_name: HashMap<&'static str, Property>,
    legal: [PropertyFlags; EntityType::COUNT],
}

static REGISTRY: OnceLock<PropertyRegistry> = OnceLock::new();

/// Returns the shared registry, building it on first call.
pub fn registry() -> &'static PropertyRegistry {
    REGISTRY.get_or_init(PropertyRegistry::build)
}

impl PropertyRegistry {
    fn build() -> Self {
        let by_name = PROPERTIES
            .iter()
            .map(|def| (def.name, def.property))
            .collect();
        let legal = EntityType::ALL.map(legal_properties);
        Self { by_name, legal }
    }

    /// Looks a property up by registry name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static PropertyDef> {
        self.by_name.get(name).map(|property| property.def())
    }

    /// Looks a property up by name, failing with [`SchemaError::UnknownProperty`].
    pub fn require(&self, name: &str) -> SchemaResult<&'static PropertyDef> {
        self.lookup(name).ok_or_else(|| SchemaError::UnknownProperty {
            name: name.to_string(),
        })
    }

    /// Returns the registry name of `property`.
    #[must_use]
    pub fn describe(&self, property: Property) -> &'static str {
        property.name()
    }

    /// Returns the table entry for `property`.
    #[must_use]
    pub fn def(&self, property: Property) -> &'static PropertyDef {
        property.def()
    }

    /// Returns the table entry for a raw ordinal.
    #[must_use]
    pub fn from_ordinal(&self, ordinal: u16) -> Option<&'static PropertyDef> {
        PROPERTIES.get(usize::from(ordinal))
    }

    /// Number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if no properties are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterates the table in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &'static PropertyDef> {
        PROPERTIES.iter()
    }

    /// Properties legal for `entity_type`.
    #[must_use]
    pub fn legal_for(&self, entity_type: EntityType) -> PropertyFlags {
        self.legal[entity_type.tag() as usize]
    }

    /// Names of the members of `flags`, in ordinal order.
    #[must_use]
    pub fn names(&self, flags: &PropertyFlags) -> Vec<&'static str> {
        flags.iter().map(Property::name).collect()
    }
}
