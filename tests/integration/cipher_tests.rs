//! Cipher transform integration tests.
//!
//! Round-trip and wraparound properties over the public API.

use caesar_cipher::cipher::{decrypt, encrypt, transform};
use caesar_cipher::Operation;

#[test]
fn test_round_trip_restores_input() {
    let original = b"The quick brown fox jumps over the lazy dog\n".to_vec();

    for key in [1, 3, 100, 255, 256, -13, 100_000] {
        let mut data = original.clone();
        encrypt(&mut data, key);
        assert_ne!(data, original, "key {} left data unchanged", key % 256);
        decrypt(&mut data, key);
        assert_eq!(data, original, "round trip failed for key {}", key);
    }
}

#[test]
fn test_transform_covers_all_byte_values() {
    // Shifting the full 0..=255 table by one rotates it; no value is
    // clamped or rejected.
    let mut data: Vec<u8> = (0..=255).collect();
    transform(&mut data, 1, Operation::Encrypt);

    let expected: Vec<u8> = (0..=255u8).map(|b| b.wrapping_add(1)).collect();
    assert_eq!(data, expected);
    assert_eq!(data[255], 0);
}

#[test]
fn test_identity_under_either_operation() {
    let original = vec![0x00, 0x7F, 0x80, 0xFF];

    let mut data = original.clone();
    transform(&mut data, 0, Operation::Encrypt);
    assert_eq!(data, original);

    transform(&mut data, 0, Operation::Decrypt);
    assert_eq!(data, original);
}

#[test]
fn test_length_never_changes() {
    for len in [0, 1, 2, 64, 4096] {
        let mut data = vec![0xABu8; len];
        transform(&mut data, 91, Operation::Encrypt);
        assert_eq!(data.len(), len);
    }
}
