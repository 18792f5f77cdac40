//! Wire framing for entity sync messages.
//!
//! This crate handles the binary layout around property payloads: the
//! routing prefix, the edit header, the fixed-capacity packet builder used
//! by the encoder, and the erase/clone entity messages. It does not know
//! about properties or entity types beyond their wire tags.
//!
//! # Design Principles
//!
//! - **Bounded decoding** - Declared counts are validated against limits and
//!   the remaining input before anything is allocated.
//! - **Atomic appends** - A field either lands in the packet whole or not at
//!   all, so an overflowing packet never holds partial bytes.
//! - **No domain knowledge** - This crate handles framing, not entity logic.

mod builder;
mod error;
mod header;
mod limits;
mod message;
mod prefix;

pub use builder::{Checkpoint, PacketBuilder, PatchRegion};
pub use error::{DecodeError, EncodeError, LimitKind, WireResult};
pub use header::{decode_edit_header, EditHeader, EDIT_HEADER_FIXED_LEN, ENTITY_ID_LEN};
pub use limits::{Limits, DEFAULT_MAX_PACKET_BYTES};
pub use message::{
    decode_clone_message, decode_erase_message, encode_clone_message, encode_erase_message,
    CLONE_MESSAGE_LEN,
};
pub use prefix::{routing_prefix_len, skip_routing_prefix, ROUTING_PREFIX_STUB};

/// Checks a whole message against `limits.max_packet_bytes`.
///
/// # Errors
///
/// Returns [`DecodeError::LimitsExceeded`] for oversized messages.
pub fn check_packet_bytes(buf: &[u8], limits: &Limits) -> WireResult<()> {
    message::check_packet_len(buf, limits)
}
