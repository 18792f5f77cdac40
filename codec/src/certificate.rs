//! Static certificate projection for marketplace items.
//!
//! The certificate covers the item's provenance fields. Its canonical form
//! is compact JSON with sorted keys holding only non-default values; the
//! signature over its SHA-256 digest travels in `certificateID`.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use schema::Property;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::defaults::is_default;
use crate::marshal::value_to_json;
use crate::record::EntityRecord;
use crate::value::PropertyValue;

/// Certificate keys and the properties they read, before versioned additions.
const CERTIFIED: [(&str, Property); 16] = [
    ("animationURL", Property::AnimationUrl),
    ("collisionSoundURL", Property::CollisionSoundUrl),
    ("compoundShapeURL", Property::CompoundShapeUrl),
    ("editionNumber", Property::EditionNumber),
    ("entityInstanceNumber", Property::EntityInstanceNumber),
    ("itemArtist", Property::ItemArtist),
    ("itemCategories", Property::ItemCategories),
    ("itemDescription", Property::ItemDescription),
    ("itemLicenseUrl", Property::ItemLicense),
    ("itemName", Property::ItemName),
    ("limitedRun", Property::LimitedRun),
    ("marketplaceID", Property::MarketplaceId),
    ("modelURL", Property::ModelUrl),
    ("script", Property::Script),
    ("shapeType", Property::ShapeType),
    ("staticCertificateVersion", Property::StaticCertificateVersion),
];

/// Verifies a signature over a certificate digest.
///
/// Key management lives outside the codec; implement this over whatever
/// public-key scheme the deployment uses.
pub trait SignatureVerifier {
    fn verify(&self, digest: &[u8; 32], signature: &[u8]) -> bool;
}

/// Returns the canonical certificate JSON of `record`.
#[must_use]
pub fn static_certificate_json(record: &EntityRecord) -> String {
    let mut fields: BTreeMap<&str, Value> = BTreeMap::new();
    let mut insert = |key: &'static str, property: Property| {
        if let Some(value) = record.get(property) {
            if !is_default(property, value) {
                fields.insert(key, value_to_json(value));
            }
        }
    };
    for (key, property) in CERTIFIED {
        insert(key, property);
    }
    let version = record
        .get(Property::StaticCertificateVersion)
        .and_then(PropertyValue::as_u32)
        .unwrap_or_default();
    if version >= 1 {
        insert("serverScripts", Property::ServerScripts);
    }
    fields.insert("type", Value::from(record.entity_type().name()));

    // Value's Display is compact; a BTreeMap keeps keys sorted.
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
    .to_string()
}

/// SHA-256 digest of [`static_certificate_json`].
#[must_use]
pub fn static_certificate_hash(record: &EntityRecord) -> [u8; 32] {
    Sha256::digest(static_certificate_json(record).as_bytes()).into()
}

/// Checks `certificateID` against the record's certificate digest.
///
/// An empty or non-base64 certificate ID fails verification.
pub fn verify_static_certificate(record: &EntityRecord, verifier: &impl SignatureVerifier) -> bool {
    let certificate_id = record
        .get(Property::CertificateId)
        .and_then(PropertyValue::as_str)
        .unwrap_or_default();
    if certificate_id.is_empty() {
        return false;
    }
    let Ok(signature) = STANDARD.decode(certificate_id) else {
        return false;
    };
    verifier.verify(&static_certificate_hash(record), &signature)
}
