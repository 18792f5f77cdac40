//! Property schema for the entity sync codec.
//!
//! This crate defines what an entity edit can carry:
//! - Property ordinals and the declarative property table
//! - Property flag sets and their shrinkable wire encoding
//! - The process-wide registry (name lookup, cached per-type legal sets)
//! - Entity types and the type dispatcher
//! - Property groups and zone component modes
//! - Deterministic schema fingerprinting
//!
//! # Design Principles
//!
//! - **One table** - Registry, dispatcher, encoder, decoder and change
//!   tracking all walk [`PROPERTIES`]; nothing names properties one by one.
//! - **Canonical order** - Ascending ordinal order fixes both what is tried
//!   first under a tight budget and how the decoder matches fields.
//! - **Init once** - The registry is built lazily behind a `OnceLock`.
//!
//! ```
//! use schema::{registry, EntityType, Property, PropertyFlags};
//!
//! let mut flags = PropertyFlags::new();
//! flags.set(Property::Color);
//! flags.set(Property::Intensity);
//! assert!(schema::validate_flags(EntityType::Light, &flags).is_ok());
//! assert_eq!(registry().describe(Property::Intensity), "intensity");
//! ```

mod dispatch;
mod entity_type;
mod error;
mod flags;
mod group;
mod hash;
mod kind;
mod property;
mod registry;
mod table;

pub use dispatch::{
    common_properties, extra_properties, extra_properties_present, legal_properties,
    validate_flags,
};
pub use entity_type::EntityType;
pub use error::{SchemaError, SchemaResult};
pub use flags::PropertyFlags;
pub use group::{ComponentMode, GroupKind};
pub use hash::schema_hash;
pub use kind::{ValueKind, ValueRange};
pub use property::Property;
pub use registry::{registry, PropertyRegistry};
pub use table::{PropertyDef, MAX_POINTS_PER_LINE, PROPERTIES};
