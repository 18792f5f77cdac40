#![no_main]

use codec::{
    decode_clone_entity, decode_edit, decode_erase_entities, encode_edit, CodecLimits,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = CodecLimits::for_testing();
    let wire_limits = wire::Limits::for_testing();

    let _ = decode_erase_entities(data, &wire_limits);
    let _ = decode_clone_entity(data);

    let Ok(decoded) = decode_edit(data, &wire_limits, &limits) else {
        return;
    };
    assert!(decoded.consumed <= data.len());

    // Whatever decoded must re-encode into a message that decodes the same way.
    let outcome = encode_edit(
        decoded.id,
        &decoded.record,
        &decoded.emitted,
        wire_limits.max_packet_bytes,
    )
    .unwrap();
    if let Ok(again) = decode_edit(&outcome.bytes, &wire_limits, &limits) {
        assert_eq!(again.emitted, outcome.emitted);
    }
});
