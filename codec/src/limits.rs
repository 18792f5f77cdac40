//! Limits for codec-level decoding.

/// Codec-specific limits enforced while decoding property values.
///
/// Every declared length is checked against these before anything is
/// allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum element count of a list property.
    pub max_list_len: usize,
    /// Maximum byte length of a string property.
    pub max_string_len: usize,
    /// Maximum byte length of a blob property.
    pub max_blob_len: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_list_len: 1024,
            max_string_len: 16 * 1024,
            max_blob_len: u16::MAX as usize,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_list_len: 128,
            max_string_len: 1024,
            max_blob_len: 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_list_len: usize::MAX,
            max_string_len: usize::MAX,
            max_blob_len: usize::MAX,
        }
    }
}
