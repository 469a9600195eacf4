//! Known-answer and property suites for AES-128 single-block encryption

use blockcrypt_algorithms::block::{Aes128, BlockCipher};
use blockcrypt_api::SecretBytes;
use blockcrypt_common::SecureCompare;
use blockcrypt_params::symmetric::{AES128_KEY_SIZE, AES_BLOCK_SIZE};
use blockcrypt_tests::vectors::{decode, FIPS197_C1, SP800_38A_ECB};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn encrypt_with(key_hex: &str, plaintext_hex: &str) -> Vec<u8> {
    let cipher = Aes128::new_from_slice(&decode(key_hex)).unwrap();
    let mut block = decode(plaintext_hex);
    cipher.encrypt_block(&mut block).unwrap();
    block
}

#[test]
fn fips197_appendix_c1_conformance() {
    let ciphertext = encrypt_with(FIPS197_C1.key, FIPS197_C1.plaintext);
    assert_eq!(ciphertext, decode(FIPS197_C1.ciphertext));
}

#[test]
fn sp800_38a_ecb_conformance() {
    for vector in &SP800_38A_ECB {
        let ciphertext = encrypt_with(vector.key, vector.plaintext);
        assert_eq!(ciphertext, decode(vector.ciphertext));
    }
}

#[test]
fn published_sizes_match_the_cipher() {
    assert_eq!(Aes128::key_size(), AES128_KEY_SIZE);
    assert_eq!(Aes128::block_size(), AES_BLOCK_SIZE);
    assert_eq!(Aes128::name(), "AES-128");
}

#[test]
fn sampled_key_pairs_give_distinct_ciphertexts() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let plaintext: [u8; 16] = rng.gen();

    for _ in 0..64 {
        let key_a: [u8; 16] = rng.gen();
        let key_b: [u8; 16] = rng.gen();
        if key_a == key_b {
            continue;
        }

        let mut block_a = plaintext;
        let mut block_b = plaintext;
        Aes128::new(&SecretBytes::new(key_a))
            .encrypt_block(&mut block_a)
            .unwrap();
        Aes128::new(&SecretBytes::new(key_b))
            .encrypt_block(&mut block_b)
            .unwrap();

        assert!(!block_a.secure_eq(&block_b));
    }
}

#[test]
fn one_schedule_matches_independent_expansions() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let key_bytes: [u8; 16] = rng.gen();
    let key = SecretBytes::new(key_bytes);
    let shared = Aes128::new(&key);

    for _ in 0..32 {
        let block: [u8; 16] = rng.gen();

        let mut via_shared = block;
        shared.encrypt_block(&mut via_shared).unwrap();

        let mut via_fresh = block;
        Aes128::new(&key).encrypt_block(&mut via_fresh).unwrap();

        assert_eq!(via_shared, via_fresh);
    }
}

proptest! {
    #[test]
    fn encryption_is_deterministic(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let secret = SecretBytes::new(key);
        let cipher = Aes128::new(&secret);

        let mut first = block;
        let mut second = block;
        cipher.encrypt_block(&mut first).unwrap();
        cipher.encrypt_block(&mut second).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_shot_matches_reusable_cipher(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let secret = SecretBytes::new(key);

        let mut reusable = block;
        Aes128::new(&secret).encrypt_block(&mut reusable).unwrap();

        let mut one_shot = block;
        Aes128::encrypt_block_with(&secret, &mut one_shot).unwrap();

        prop_assert_eq!(reusable, one_shot);
    }
}
