//! Property-based tests for flag set encoding.

use proptest::prelude::*;
use schema::{EntityType, Property, PropertyFlags};

fn arb_flags() -> impl Strategy<Value = PropertyFlags> {
    prop::collection::vec(0..Property::COUNT as u16, 0..40).prop_map(|ordinals| {
        ordinals
            .into_iter()
            .filter_map(Property::from_ordinal)
            .collect()
    })
}

proptest! {
    #[test]
    fn flags_roundtrip(flags in arb_flags()) {
        let bytes = flags.encode();
        prop_assert_eq!(bytes.len(), flags.encoded_len());
        let (decoded, consumed) = PropertyFlags::decode(&bytes, Property::COUNT).unwrap();
        prop_assert_eq!(decoded, flags);
        prop_assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn encoding_is_minimal(flags in arb_flags()) {
        let len = flags.encoded_len();
        match flags.highest_ordinal() {
            // the highest ordinal lands in the last byte's value bits
            Some(highest) => {
                prop_assert!(usize::from(highest) < 7 * len);
                prop_assert!(len == 1 || usize::from(highest) >= 7 * (len - 1));
            }
            None => prop_assert_eq!(len, 1),
        }
    }

    #[test]
    fn removing_members_never_grows_encoding(flags in arb_flags(), drop in arb_flags()) {
        let smaller = flags.difference(&drop);
        prop_assert!(smaller.encoded_len() <= flags.encoded_len());
    }

    #[test]
    fn legal_sets_validate(index in 0..EntityType::COUNT) {
        let entity_type = EntityType::ALL[index];
        let legal = schema::legal_properties(entity_type);
        prop_assert!(schema::validate_flags(entity_type, &legal).is_ok());
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..48)) {
        let _ = PropertyFlags::decode(&bytes, Property::COUNT);
    }
}
