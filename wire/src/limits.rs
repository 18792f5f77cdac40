//! Configurable limits for bounded decoding.

/// Wire-level limits for edit and entity messages.
///
/// These limits are enforced during decoding to prevent resource exhaustion
/// and ensure bounded memory usage. Property payload limits belong to the
/// codec layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum message size in bytes.
    pub max_packet_bytes: usize,

    /// Maximum number of IDs accepted in one erase message.
    pub max_erase_ids: usize,
}

/// Size of one MTU-sized datagram payload.
pub const DEFAULT_MAX_PACKET_BYTES: usize = 1492;

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_packet_bytes: DEFAULT_MAX_PACKET_BYTES,
            // An erase message is a u32 count plus 16-byte IDs.
            max_erase_ids: (DEFAULT_MAX_PACKET_BYTES - 4) / 16,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_packet_bytes: 512,
            max_erase_ids: 8,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_packet_bytes: usize::MAX,
            max_erase_ids: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_packet_bytes() {
        let limits = Limits::default();
        assert_eq!(limits.max_packet_bytes, 1492);
    }

    #[test]
    fn default_erase_ids_fill_one_packet() {
        let limits = Limits::default();
        assert_eq!(limits.max_erase_ids, 93);
        assert!(4 + limits.max_erase_ids * 16 <= limits.max_packet_bytes);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = Limits::for_testing();
        let default_limits = Limits::default();

        assert!(test_limits.max_packet_bytes < default_limits.max_packet_bytes);
        assert!(test_limits.max_erase_ids < default_limits.max_erase_ids);
    }

    #[test]
    fn unlimited_limits() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_packet_bytes, usize::MAX);
        assert_eq!(limits.max_erase_ids, usize::MAX);
    }

    #[test]
    fn limits_equality() {
        assert_eq!(Limits::default(), Limits::default());
        assert_ne!(Limits::default(), Limits::for_testing());
    }
}
