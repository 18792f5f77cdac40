//! Fixed-capacity packet builder.
//!
//! The builder is append-only with two exceptions: a rollback to a
//! checkpoint, which discards a partially written field, and a patch of a
//! previously reserved region, which may shrink it and shift everything
//! after it to the left.

use crate::error::EncodeError;

/// Append-only byte buffer that never grows past its capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketBuilder {
    buf: Vec<u8>,
    capacity: usize,
}

/// Position to which a builder can be rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// A reserved span that can later be overwritten with fewer or equal bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRegion {
    offset: usize,
    len: usize,
}

impl PatchRegion {
    /// Byte offset of the region within the packet.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Reserved length of the region.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the region reserved no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PacketBuilder {
    /// Creates an empty builder limited to `capacity` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::from_buffer(Vec::new(), capacity)
    }

    /// Creates an empty builder that reuses `buf`'s allocation.
    #[must_use]
    pub fn from_buffer(mut buf: Vec<u8>, capacity: usize) -> Self {
        buf.clear();
        if buf.capacity() < capacity && capacity <= 64 * 1024 {
            buf.reserve(capacity);
        }
        Self { buf, capacity }
    }

    /// Maximum number of bytes the packet may hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of bytes that can still be appended.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.buf.len())
    }

    /// Returns `true` if `len` more bytes fit.
    #[must_use]
    pub fn fits(&self, len: usize) -> bool {
        len <= self.remaining()
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Appends `bytes` entirely or not at all.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::BufferTooSmall`] if the bytes do not fit; the
    /// builder is left unchanged.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        if !self.fits(bytes.len()) {
            return Err(EncodeError::BufferTooSmall {
                needed: bytes.len(),
                available: self.remaining(),
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Records the current length so a later write can be undone.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.buf.len())
    }

    /// Discards everything written after `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.buf.truncate(checkpoint.0);
    }

    /// Appends `placeholder` and remembers where it lives.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::BufferTooSmall`] if the placeholder does not fit.
    pub fn reserve_patch(&mut self, placeholder: &[u8]) -> Result<PatchRegion, EncodeError> {
        let offset = self.buf.len();
        self.append(placeholder)?;
        Ok(PatchRegion {
            offset,
            len: placeholder.len(),
        })
    }

    /// Overwrites a reserved region, shifting later bytes left if the
    /// replacement is shorter. Returns the number of bytes removed.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::PatchGrew`] if the replacement is longer than
    /// the region, or [`EncodeError::LengthOverflow`] if the region no longer
    /// lies inside the written bytes (for example after a rollback past it).
    pub fn patch(&mut self, region: PatchRegion, replacement: &[u8]) -> Result<usize, EncodeError> {
        if replacement.len() > region.len {
            return Err(EncodeError::PatchGrew {
                reserved: region.len,
                replacement: replacement.len(),
            });
        }
        let end = region.offset + region.len;
        if end > self.buf.len() {
            return Err(EncodeError::LengthOverflow { length: end });
        }
        let new_end = region.offset + replacement.len();
        self.buf[region.offset..new_end].copy_from_slice(replacement);
        let shrink = region.len - replacement.len();
        if shrink > 0 {
            self.buf.copy_within(end.., new_end);
            let len = self.buf.len() - shrink;
            self.buf.truncate(len);
        }
        Ok(shrink)
    }

    /// Returns the finished packet.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
