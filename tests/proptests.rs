//! Property-based tests for the pure codecs.

use proptest::collection::vec;
use proptest::prelude::*;
use rsa_kit::pem::Label;
use rsa_kit::{der, pem};

proptest! {
    #[test]
    fn der_wrap_unwrap_round_trips(raw in vec(any::<u8>(), 0..2048)) {
        let wrapped = der::wrap_public_key(&raw);
        prop_assert_eq!(der::unwrap_public_key_if_present(&wrapped), raw.as_slice());
    }

    #[test]
    fn der_unwrap_is_idempotent(data in vec(any::<u8>(), 0..2048)) {
        let once = der::unwrap_public_key_if_present(&data).to_vec();
        prop_assert_eq!(der::unwrap_public_key_if_present(&once), once.as_slice());
    }

    #[test]
    fn der_unwrap_never_grows_the_input(data in vec(any::<u8>(), 0..2048)) {
        prop_assert!(der::unwrap_public_key_if_present(&data).len() <= data.len());
    }

    #[test]
    fn pem_round_trips(data in vec(any::<u8>(), 1..2048), public in any::<bool>()) {
        let label = if public { Label::Public } else { Label::Private };
        let encoded = pem::encode(&data, label);
        prop_assert_eq!(pem::decode(&encoded).unwrap(), data);
    }

    #[test]
    fn pem_body_lines_never_exceed_64_characters(data in vec(any::<u8>(), 1..2048)) {
        let encoded = pem::encode(&data, Label::Public);
        for line in encoded.lines() {
            prop_assert!(line.len() <= 64 || line.starts_with("-----"));
        }
    }
}
