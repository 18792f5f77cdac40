#![no_main]

use libfuzzer_sys::fuzz_target;
use schema::{Property, PropertyFlags};

fuzz_target!(|data: &[u8]| {
    if let Ok((flags, used)) = PropertyFlags::decode(data, Property::COUNT) {
        assert!(used <= data.len());
        let encoded = flags.encode();
        assert_eq!(encoded.len(), flags.encoded_len());
        let (again, _) = PropertyFlags::decode(&encoded, Property::COUNT).unwrap();
        assert_eq!(again, flags);
    }
});
