//! Schema lookup and validation errors.

use std::fmt;

use bitstream::BitError;

use crate::entity_type::EntityType;
use crate::property::Property;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when resolving or validating properties.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// No property is registered under this name.
    UnknownProperty { name: String },

    /// A flag set names an ordinal past the table.
    OrdinalOutOfRange { ordinal: usize, max: usize },

    /// A property is not legal for the entity type.
    IllegalProperty {
        entity_type: EntityType,
        property: Property,
    },

    /// Malformed flag set encoding.
    Bitstream(BitError),
}

impl SchemaError {
    /// Returns `true` if the input ended before the flag set was complete.
    #[must_use]
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::Bitstream(err) if err.is_truncation())
    }
}

impl From<BitError> for SchemaError {
    fn from(err: BitError) -> Self {
        Self::Bitstream(err)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty { name } => write!(f, "unknown property: {name}"),
            Self::OrdinalOutOfRange { ordinal, max } => {
                write!(f, "property ordinal {ordinal} out of range (max {max})")
            }
            Self::IllegalProperty {
                entity_type,
                property,
            } => {
                write!(f, "property {property} is not legal for {entity_type}")
            }
            Self::Bitstream(err) => write!(f, "flag set error: {err}"),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(err) => Some(err),
            _ => None,
        }
    }
}
