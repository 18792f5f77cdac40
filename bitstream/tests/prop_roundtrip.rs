use bitstream::{byte_count_len, decode_byte_count, encode_byte_count, BitReader, BitWriter};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Bit(bool),
    Bits { bits: u8, value: u64 },
    Align,
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(u32),
    ByteCount(u64),
    Bytes(Vec<u8>),
}

fn mask_value(bits: u8, value: u64) -> u64 {
    if bits >= 64 {
        value
    } else {
        let mask = (1u64 << bits) - 1;
        value & mask
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Bit),
        (1u8..=64, any::<u64>()).prop_map(|(bits, value)| Op::Bits {
            bits,
            value: mask_value(bits, value),
        }),
        Just(Op::Align),
        any::<u8>().prop_map(Op::U8),
        any::<u16>().prop_map(Op::U16),
        any::<u32>().prop_map(Op::U32),
        any::<u64>().prop_map(Op::U64),
        any::<u32>().prop_map(Op::F32),
        any::<u64>().prop_map(Op::ByteCount),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Op::Bytes),
    ]
}

fn needs_alignment(op: &Op) -> bool {
    !matches!(op, Op::Bit(_) | Op::Bits { .. } | Op::Align)
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut writer = BitWriter::new();

        for op in &ops {
            if needs_alignment(op) {
                writer.align_to_byte();
            }
            match op {
                Op::Bit(b) => writer.write_bit(*b),
                Op::Bits { bits, value } => writer.write_bits(*value, *bits).unwrap(),
                Op::Align => writer.align_to_byte(),
                Op::U8(v) => writer.write_u8_aligned(*v).unwrap(),
                Op::U16(v) => writer.write_u16_aligned(*v).unwrap(),
                Op::U32(v) => writer.write_u32_aligned(*v).unwrap(),
                Op::U64(v) => writer.write_u64_aligned(*v).unwrap(),
                Op::F32(raw) => writer.write_f32_aligned(f32::from_bits(*raw)).unwrap(),
                Op::ByteCount(v) => writer.write_byte_count(*v),
                Op::Bytes(bytes) => writer.write_bytes_aligned(bytes).unwrap(),
            }
        }

        let bytes = writer.finish();
        let mut reader = BitReader::new(&bytes);

        for op in &ops {
            if needs_alignment(op) {
                reader.align_to_byte().unwrap();
            }
            match op {
                Op::Bit(b) => prop_assert_eq!(reader.read_bit().unwrap(), *b),
                Op::Bits { bits, value } => {
                    prop_assert_eq!(reader.read_bits(*bits).unwrap(), *value);
                }
                Op::Align => reader.align_to_byte().unwrap(),
                Op::U8(v) => prop_assert_eq!(reader.read_u8_aligned().unwrap(), *v),
                Op::U16(v) => prop_assert_eq!(reader.read_u16_aligned().unwrap(), *v),
                Op::U32(v) => prop_assert_eq!(reader.read_u32_aligned().unwrap(), *v),
                Op::U64(v) => prop_assert_eq!(reader.read_u64_aligned().unwrap(), *v),
                Op::F32(raw) => {
                    prop_assert_eq!(reader.read_f32_aligned().unwrap().to_bits(), *raw);
                }
                Op::ByteCount(v) => prop_assert_eq!(reader.read_byte_count().unwrap(), *v),
                Op::Bytes(expected) => {
                    prop_assert_eq!(reader.read_bytes_aligned(expected.len()).unwrap(), &expected[..]);
                }
            }
        }
    }

    #[test]
    fn prop_byte_count_is_minimal_and_roundtrips(value in any::<u64>()) {
        let bytes = encode_byte_count(value);
        prop_assert_eq!(bytes.len(), byte_count_len(value));
        let (decoded, consumed) = decode_byte_count(&bytes).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn prop_byte_count_length_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(byte_count_len(lo) <= byte_count_len(hi));
    }

    #[test]
    fn prop_byte_count_truncation_is_detected(value in 128u64.., cut in 0usize..10) {
        let bytes = encode_byte_count(value);
        let cut = cut % bytes.len();
        let err = decode_byte_count(&bytes[..cut]).unwrap_err();
        prop_assert!(err.is_truncation());
    }
}
