//! Error types for codec operations.

use std::fmt;

use schema::{EntityType, Property, ValueKind};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while building, encoding or decoding entity edits.
///
/// Running out of packet space is not an error: it is reported through
/// [`EncodeOutcome::didnt_fit`](crate::EncodeOutcome::didnt_fit).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodecError {
    /// Wire format error.
    Wire(wire::DecodeError),

    /// Bitstream error.
    Bitstream(bitstream::BitError),

    /// Flag set or registry error.
    Schema(schema::SchemaError),

    /// Packet builder error.
    Encode(wire::EncodeError),

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// A declared length does not match the bytes that remain.
    LengthMismatch {
        property: Property,
        declared: usize,
        available: usize,
    },

    /// A flagged property is not legal for the entity type.
    IllegalProperty {
        entity_type: EntityType,
        property: Property,
    },

    /// A value of the wrong kind was assigned to a property.
    TypeMismatch {
        property: Property,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A string or blob is too long for its u16 length field.
    ValueTooLong { property: Property, len: usize },

    /// A string property did not hold valid UTF-8.
    InvalidUtf8 { property: Property },

    /// A JSON value could not be converted to the property's kind.
    JsonType { name: String, expected: ValueKind },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    ListLength,
    StringBytes,
    BlobBytes,
    /// The per-property element cap from the property table.
    PropertyMaxLen,
}

impl CodecError {
    /// Returns `true` if the input ended before the message was complete.
    #[must_use]
    pub const fn is_truncated_input(&self) -> bool {
        match self {
            Self::Wire(err) => err.is_truncation(),
            Self::Bitstream(err) => err.is_truncation(),
            Self::Schema(err) => err.is_truncation(),
            Self::LengthMismatch { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::Schema(e) => write!(f, "schema error: {e}"),
            Self::Encode(e) => write!(f, "encode error: {e}"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::LengthMismatch {
                property,
                declared,
                available,
            } => {
                write!(
                    f,
                    "{property} declares {declared} bytes but only {available} remain"
                )
            }
            Self::IllegalProperty {
                entity_type,
                property,
            } => {
                write!(f, "property {property} is not legal for {entity_type}")
            }
            Self::TypeMismatch {
                property,
                expected,
                found,
            } => {
                write!(f, "{property} expects {expected} but got {found}")
            }
            Self::ValueTooLong { property, len } => {
                write!(f, "{property} value of {len} bytes exceeds u16 length")
            }
            Self::InvalidUtf8 { property } => {
                write!(f, "{property} is not valid UTF-8")
            }
            Self::JsonType { name, expected } => {
                write!(f, "JSON value for {name} cannot be read as {expected}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListLength => "list length",
            Self::StringBytes => "string bytes",
            Self::BlobBytes => "blob bytes",
            Self::PropertyMaxLen => "property max length",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            Self::Bitstream(e) => Some(e),
            Self::Schema(e) => Some(e),
            Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<wire::EncodeError> for CodecError {
    fn from(err: wire::EncodeError) -> Self {
        Self::Encode(err)
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}

impl From<schema::SchemaError> for CodecError {
    fn from(err: schema::SchemaError) -> Self {
        match err {
            schema::SchemaError::IllegalProperty {
                entity_type,
                property,
            } => Self::IllegalProperty {
                entity_type,
                property,
            },
            other => Self::Schema(other),
        }
    }
}
