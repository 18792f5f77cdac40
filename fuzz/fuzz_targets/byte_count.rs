#![no_main]

use bitstream::{byte_count_len, decode_byte_count, encode_byte_count};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((value, used)) = decode_byte_count(data) {
        assert!(used <= data.len());
        let encoded = encode_byte_count(value);
        assert_eq!(encoded.len(), byte_count_len(value));
        assert_eq!(decode_byte_count(&encoded).ok(), Some((value, encoded.len())));
    }
});
