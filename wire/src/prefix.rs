//! Routing prefix that precedes every edit message.
//!
//! The prefix is owned by the spatial addressing layer. Its first byte holds
//! a section count `n`, followed by `n` three-bit codes packed into whole
//! bytes. The codec never interprets the codes; it emits the zero-length
//! stub and skips whatever prefix a peer sent.

use crate::error::{DecodeError, WireResult};

/// Prefix written by the encoder: zero sections, one byte.
pub const ROUTING_PREFIX_STUB: [u8; 1] = [0x00];

/// Returns the encoded length of a prefix whose first byte is `sections`.
#[must_use]
pub const fn routing_prefix_len(sections: u8) -> usize {
    1 + (3 * sections as usize).div_ceil(8)
}

/// Returns the number of bytes to skip to get past the routing prefix.
///
/// # Errors
///
/// Returns [`DecodeError::MissingPrefix`] for an empty buffer and
/// [`DecodeError::Truncated`] if the prefix claims more bytes than remain.
pub fn skip_routing_prefix(buf: &[u8]) -> WireResult<usize> {
    let Some(&sections) = buf.first() else {
        return Err(DecodeError::MissingPrefix);
    };
    let len = routing_prefix_len(sections);
    if len > buf.len() {
        return Err(DecodeError::Truncated {
            needed: len,
            available: buf.len(),
        });
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_is_one_byte() {
        assert_eq!(skip_routing_prefix(&ROUTING_PREFIX_STUB).unwrap(), 1);
    }

    #[test]
    fn prefix_len_rounds_up_codes() {
        assert_eq!(routing_prefix_len(0), 1);
        assert_eq!(routing_prefix_len(1), 2);
        assert_eq!(routing_prefix_len(3), 3);
        assert_eq!(routing_prefix_len(8), 4);
        assert_eq!(routing_prefix_len(255), 1 + 96);
    }

    #[test]
    fn skip_reports_truncation() {
        let err = skip_routing_prefix(&[8, 0xFF]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                needed: 4,
                available: 2
            }
        );
    }

    #[test]
    fn empty_buffer_has_no_prefix() {
        assert_eq!(skip_routing_prefix(&[]), Err(DecodeError::MissingPrefix));
    }
}
