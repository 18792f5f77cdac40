//! Reusable scratch buffers for codec operations.

use bitstream::BitWriter;

/// Scratch buffers for edit encoding.
///
/// Each property value is encoded here first so that it can be appended to
/// the packet whole or not at all.
#[derive(Debug, Default)]
pub struct CodecScratch {
    value: BitWriter,
}

impl CodecScratch {
    /// Creates a new scratch buffer with no pre-allocated capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scratch buffer able to hold `bytes` of one value.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            value: BitWriter::with_capacity(bytes),
        }
    }

    pub(crate) fn value_writer(&mut self) -> &mut BitWriter {
        self.value.clear();
        &mut self.value
    }

    pub(crate) fn value_bytes(&self) -> &[u8] {
        self.value.as_aligned_bytes()
    }
}
