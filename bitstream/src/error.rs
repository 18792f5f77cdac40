//! Error types for bitstream operations.

use std::fmt;

/// Result type for bitstream operations.
pub type BitResult<T> = Result<T, BitError>;

/// Errors that can occur during bit-level encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bits requested.
        requested: usize,
        /// Number of bits available.
        available: usize,
    },

    /// Invalid bit count for the operation.
    InvalidBitCount {
        /// The invalid bit count provided.
        bits: u8,
        /// Maximum allowed bits for this operation.
        max_bits: u8,
    },

    /// Value exceeds the range representable by the specified number of bits.
    ValueOutOfRange {
        /// The value that was out of range.
        value: u64,
        /// Number of bits available.
        bits: u8,
    },

    /// A byte-aligned operation was attempted at a non-aligned position.
    MisalignedAccess {
        /// Bit position at the time of the access.
        bit_position: usize,
    },

    /// A length prefix claimed more bytes than the format allows.
    InvalidLengthPrefix {
        /// Number of bytes the prefix claimed (at least).
        claimed: usize,
        /// Maximum number of bytes permitted.
        max_bytes: usize,
    },

    /// A byte-count coded value does not fit in 64 bits.
    ByteCountOverflow {
        /// Encoded length in bytes.
        bytes: usize,
    },
}

impl BitError {
    /// Returns `true` if the error means the input ended early.
    #[must_use]
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bits but only {available} bits available"
                )
            }
            Self::InvalidBitCount { bits, max_bits } => {
                write!(f, "invalid bit count {bits}, maximum allowed is {max_bits}")
            }
            Self::ValueOutOfRange { value, bits } => {
                write!(f, "value {value} cannot be represented in {bits} bits")
            }
            Self::MisalignedAccess { bit_position } => {
                write!(f, "byte-aligned access at unaligned bit position {bit_position}")
            }
            Self::InvalidLengthPrefix { claimed, max_bytes } => {
                write!(
                    f,
                    "length prefix claims {claimed} bytes, maximum is {max_bytes}"
                )
            }
            Self::ByteCountOverflow { bytes } => {
                write!(f, "{bytes}-byte byte-count value overflows u64")
            }
        }
    }
}

impl std::error::Error for BitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unexpected_eof() {
        let err = BitError::UnexpectedEof {
            requested: 8,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("8 bits"), "should mention requested bits");
        assert!(msg.contains("3 bits"), "should mention available bits");
        assert!(msg.contains("read"), "should mention read operation");
    }

    #[test]
    fn error_display_invalid_bit_count() {
        let err = BitError::InvalidBitCount {
            bits: 128,
            max_bits: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("128"), "should mention invalid count");
        assert!(msg.contains("64"), "should mention maximum");
    }

    #[test]
    fn error_display_value_out_of_range() {
        let err = BitError::ValueOutOfRange {
            value: 256,
            bits: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("256"), "should mention the value");
        assert!(msg.contains("8 bits"), "should mention bit count");
    }

    #[test]
    fn error_display_misaligned() {
        let err = BitError::MisalignedAccess { bit_position: 3 };
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn error_display_length_prefix() {
        let err = BitError::InvalidLengthPrefix {
            claimed: 11,
            max_bytes: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn error_display_byte_count_overflow() {
        let err = BitError::ByteCountOverflow { bytes: 10 };
        assert!(err.to_string().contains("overflows u64"));
    }

    #[test]
    fn truncation_classification() {
        assert!(BitError::UnexpectedEof {
            requested: 1,
            available: 0
        }
        .is_truncation());
        assert!(!BitError::ByteCountOverflow { bytes: 10 }.is_truncation());
    }

    #[test]
    fn error_equality() {
        let err1 = BitError::UnexpectedEof {
            requested: 8,
            available: 3,
        };
        let err2 = BitError::UnexpectedEof {
            requested: 8,
            available: 3,
        };
        let err3 = BitError::UnexpectedEof {
            requested: 8,
            available: 4,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_debug() {
        let err = BitError::UnexpectedEof {
            requested: 1,
            available: 0,
        };
        let debug = format!("{err:?}");
        assert!(debug.contains("UnexpectedEof"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<BitError>();
    }
}
