//! Error types for wire format operations.

use std::fmt;

use bitstream::BitError;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// High-level decode errors for wire framing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The buffer ended before a fixed or declared field was complete.
    Truncated { needed: usize, available: usize },

    /// Packet is empty where a routing prefix was expected.
    MissingPrefix,

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Malformed bit-level content (length prefix, byte-count overflow).
    Bitstream(BitError),
}

impl DecodeError {
    /// Returns `true` if the input ended before the message was complete.
    #[must_use]
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Specific wire limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    PacketBytes,
    EraseIds,
}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The builder has no room for the requested bytes.
    BufferTooSmall { needed: usize, available: usize },
    /// A patch would replace a region with more bytes than it reserved.
    PatchGrew { reserved: usize, replacement: usize },
    /// A length does not fit the field that carries it.
    LengthOverflow { length: usize },
}

impl From<BitError> for DecodeError {
    fn from(err: BitError) -> Self {
        match err {
            BitError::UnexpectedEof {
                requested,
                available,
            } => Self::Truncated {
                needed: requested.div_ceil(8),
                available: available / 8,
            },
            other => Self::Bitstream(other),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { needed, available } => {
                write!(
                    f,
                    "truncated input: need {needed} bytes, have {available}"
                )
            }
            Self::MissingPrefix => write!(f, "packet is missing its routing prefix"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::Bitstream(err) => write!(f, "bitstream error: {err}"),
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PacketBytes => "packet bytes",
            Self::EraseIds => "erase ids",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {needed}, have {available}")
            }
            Self::PatchGrew {
                reserved,
                replacement,
            } => {
                write!(
                    f,
                    "patch of {replacement} bytes exceeds reserved region of {reserved}"
                )
            }
            Self::LengthOverflow { length } => {
                write!(f, "length overflow: {length}")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn decode_error_display_truncated() {
        let err = DecodeError::Truncated {
            needed: 16,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("truncated"));
        assert!(msg.contains("16"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn decode_error_display_limits_exceeded() {
        let err = DecodeError::LimitsExceeded {
            kind: LimitKind::EraseIds,
            limit: 4,
            actual: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("erase ids"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn eof_converts_to_truncated_bytes() {
        let err = DecodeError::from(BitError::UnexpectedEof {
            requested: 64,
            available: 20,
        });
        assert_eq!(
            err,
            DecodeError::Truncated {
                needed: 8,
                available: 2
            }
        );
        assert!(err.is_truncation());
    }

    #[test]
    fn other_bit_errors_are_wrapped() {
        let err = DecodeError::from(BitError::ByteCountOverflow { bytes: 10 });
        assert!(!err.is_truncation());
        assert!(err.source().is_some());
    }

    #[test]
    fn encode_error_display() {
        let err = EncodeError::BufferTooSmall {
            needed: 10,
            available: 4,
        };
        assert!(err.to_string().contains("buffer too small"));

        let err = EncodeError::PatchGrew {
            reserved: 2,
            replacement: 3,
        };
        assert!(err.to_string().contains("exceeds reserved"));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<DecodeError>();
        assert_error::<EncodeError>();
    }
}
