//! Integration and property tests for the full compress/frame pipeline

use huffpack::{
    compress, compress_to_frame, decompress, decompress_frame, BitVec, FrequencyTable, HuffError,
};
use proptest::prelude::*;

fn test_datasets() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("single_byte", b"x".to_vec()),
        ("single_symbol_run", vec![42u8; 512]),
        ("two_symbols", b"abababababab".to_vec()),
        (
            "text",
            "The quick brown fox jumps over the lazy dog. "
                .repeat(40)
                .into_bytes(),
        ),
        ("all_byte_values", (0..=255u8).cycle().take(2048).collect()),
        (
            "skewed",
            std::iter::repeat(b'a')
                .take(1000)
                .chain((0..=255u8).take(64))
                .collect(),
        ),
        ("binary_pattern", (0..1024).map(|i| (i * 31 + 17) as u8).collect()),
    ]
}

#[test]
fn roundtrip_across_datasets() {
    for (name, data) in test_datasets() {
        let encoded = compress(&data).unwrap();
        let restored = decompress(&encoded.bits, &encoded.frequencies).unwrap();
        assert_eq!(restored, data, "core round trip failed for {}", name);

        let frame = compress_to_frame(name, &data).unwrap();
        let (metadata, restored) = decompress_frame(&frame).unwrap();
        assert_eq!(metadata.original_name, name);
        assert_eq!(restored, data, "frame round trip failed for {}", name);
    }
}

#[test]
fn frequency_tables_match_input() {
    for (name, data) in test_datasets() {
        let encoded = compress(&data).unwrap();
        assert_eq!(
            encoded.frequencies,
            FrequencyTable::from_bytes(&data),
            "table mismatch for {}",
            name
        );
        assert_eq!(encoded.frequencies.total(), data.len() as u64);
    }
}

#[test]
fn independent_instances_agree() {
    for (name, data) in test_datasets() {
        let first = compress(&data).unwrap();
        let second = compress(&data).unwrap();
        assert_eq!(first, second, "determinism failed for {}", name);
    }
}

#[test]
fn corrupted_frame_never_roundtrips_silently() {
    let data = b"sensitive payload that must not be silently mangled".to_vec();
    let frame = compress_to_frame("payload.bin", &data).unwrap();

    // flip a bit in the second-to-last payload byte, which is pure bit data
    // (the final byte may end in padding bits that unpacking strips)
    let mut corrupted = frame.clone();
    let target = corrupted.len() - 2;
    corrupted[target] ^= 0x10;

    match decompress_frame(&corrupted) {
        Ok((_, restored)) => assert_ne!(restored, data),
        Err(err) => assert!(matches!(
            err,
            HuffError::CorruptStream { .. } | HuffError::InvalidTable { .. }
        )),
    }
}

proptest! {
    #[test]
    fn prop_roundtrip_arbitrary_bytes(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let encoded = compress(&data).unwrap();
        let restored = decompress(&encoded.bits, &encoded.frequencies).unwrap();
        prop_assert_eq!(restored, data);
    }

    #[test]
    fn prop_pack_roundtrip(raw in proptest::collection::vec(any::<bool>(), 0..512)) {
        let bits: BitVec = raw.iter().copied().collect();
        let packed = bits.pack();

        let expected_padding = (8 - raw.len() % 8) % 8;
        prop_assert_eq!(packed[0] as usize, expected_padding);

        let unpacked = BitVec::unpack(&packed).unwrap();
        prop_assert_eq!(unpacked, bits);
    }

    #[test]
    fn prop_frame_roundtrip(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        name in "[a-zA-Z0-9_]{1,16}\\.[a-z]{1,4}",
    ) {
        let frame = compress_to_frame(&name, &data).unwrap();
        let (metadata, restored) = decompress_frame(&frame).unwrap();
        prop_assert_eq!(metadata.original_name, name);
        prop_assert_eq!(restored, data);
    }

    #[test]
    fn prop_encoded_never_longer_than_byte_per_symbol_plus_table(
        data in proptest::collection::vec(any::<u8>(), 1..1024),
    ) {
        // each code is at most 255 bits for a 256-symbol alphabet, and at
        // least one bit, so the bit count is bounded both ways
        let encoded = compress(&data).unwrap();
        prop_assert!(encoded.bits.len() >= data.len());
        prop_assert!(encoded.bits.len() <= data.len() * 255);
    }
}
