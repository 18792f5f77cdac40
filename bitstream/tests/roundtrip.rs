use bitstream::{decode_byte_count, encode_byte_count, BitReader, BitWriter};

#[test]
fn writer_roundtrip_mixed() {
    let mut writer = BitWriter::new();
    writer.write_bit(true);
    writer.write_bits(0b1010, 4).unwrap();
    writer.align_to_byte();
    writer.write_u16_aligned(0xBEEF).unwrap();
    writer.write_byte_count(300);
    writer.write_bytes_aligned(b"abc").unwrap();
    let bytes = writer.finish();

    let mut reader = BitReader::new(&bytes);
    assert!(reader.read_bit().unwrap());
    assert_eq!(reader.read_bits(4).unwrap(), 0b1010);
    reader.align_to_byte().unwrap();
    assert_eq!(reader.read_u16_aligned().unwrap(), 0xBEEF);
    assert_eq!(reader.read_byte_count().unwrap(), 300);
    assert_eq!(reader.read_bytes_aligned(3).unwrap(), b"abc");
    assert!(reader.is_empty());
}

#[test]
fn consecutive_byte_counts_decode_in_order() {
    let mut bytes = Vec::new();
    for value in [0u64, 1, 127, 128, 16_383, 16_384, u64::from(u32::MAX)] {
        bytes.extend(encode_byte_count(value));
    }

    let mut offset = 0;
    let mut decoded = Vec::new();
    while offset < bytes.len() {
        let (value, used) = decode_byte_count(&bytes[offset..]).unwrap();
        decoded.push(value);
        offset += used;
    }
    assert_eq!(decoded, vec![0, 1, 127, 128, 16_383, 16_384, u64::from(u32::MAX)]);
}
