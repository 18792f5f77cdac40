//! Entity records and edit-message encoding/decoding for the entity sync codec.
//!
//! This is the main codec crate that ties together bitstream, wire, and schema
//! to turn entity records into size-bounded edit messages and back.
//!
//! # Features
//!
//! - Typed property values with per-property defaults and clamping
//! - Entity records with change tracking, merge and clone conversion
//! - Edit encoding under a byte budget with a "didn't fit" remainder
//! - Edit decoding with per-type legality checks
//! - Erase and clone entity messages
//! - JSON marshalling and static certificate hashing
//!
//! # Design Principles
//!
//! - **Correctness first** - All invariants are documented and tested.
//! - **Bounded decoding** - Declared lengths are checked before allocation.
//! - **Deterministic** - Same inputs produce same outputs.

mod certificate;
mod decode;
mod defaults;
mod encode;
mod error;
mod group;
mod limits;
mod marshal;
mod message;
mod record;
mod scratch;
mod types;
mod value;

pub use certificate::{
    static_certificate_hash, static_certificate_json, verify_static_certificate,
    SignatureVerifier,
};
pub use decode::{decode_edit, DecodedEdit};
pub use defaults::{default_value, is_default, DEFAULT_SHAPE, NO_PARENT_JOINT};
pub use encode::{encode_edit, encode_edit_with_scratch, EncodeOutcome, EncodeState};
pub use error::{CodecError, CodecResult, LimitKind};
pub use group::PropertyGroup;
pub use limits::CodecLimits;
pub use marshal::{apply_json_object, to_json_object, value_from_json, value_to_json};
pub use message::{
    decode_clone_entity, decode_erase_entities, encode_clone_entity, encode_erase_entities,
};
pub use record::{extra_properties_present, EntityRecord};
pub use scratch::CodecScratch;
pub use types::{usecs_now, EntityId};
pub use value::{AaCube, Color, PropertyValue};
pub use wire::Limits as WireLimits;
