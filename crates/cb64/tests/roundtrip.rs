//! Property tests for the encode/decode pair.

use cb64::{decode, decoded_len_bound, encode, encoded_len};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_inverts_encode(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut encoded = vec![0u8; encoded_len(blob.len())];
        let encoded_bytes = encode(&blob, &mut encoded).unwrap();
        prop_assert_eq!(encoded_bytes, encoded.len());

        let mut decoded = vec![0u8; decoded_len_bound(encoded_bytes)];
        let decoded_bytes = decode(&encoded, &mut decoded).unwrap();
        prop_assert_eq!(&decoded[..decoded_bytes], blob.as_slice());
    }

    #[test]
    fn encoded_length_law(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut encoded = vec![0u8; encoded_len(blob.len())];
        let encoded_bytes = encode(&blob, &mut encoded).unwrap();
        prop_assert_eq!(encoded_bytes, 4 * blob.len().div_ceil(3));
    }

    #[test]
    fn padding_law(blob in proptest::collection::vec(any::<u8>(), 1..512)) {
        let mut encoded = vec![0u8; encoded_len(blob.len())];
        let encoded_bytes = encode(&blob, &mut encoded).unwrap();
        let pads = encoded[..encoded_bytes]
            .iter()
            .rev()
            .take_while(|&&b| b == b'=')
            .count();
        let expected = match blob.len() % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        prop_assert_eq!(pads, expected);
    }
}
