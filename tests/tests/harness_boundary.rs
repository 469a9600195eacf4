//! Boundary behavior of the streaming collaborator contract
//!
//! The harness emits one ciphertext block per complete 16-byte input chunk
//! and silently discards a trailing partial chunk; input lengths that are
//! not block multiples are neither padded nor reported as errors.

use std::io::Cursor;

use blockcrypt_algorithms::block::{Aes128, BlockCipher};
use blockcrypt_api::SecretBytes;
use blockcrypt_tests::harness::encrypt_chunked;

fn test_cipher() -> Aes128 {
    Aes128::new(&SecretBytes::new([0x42; 16]))
}

fn patterned_input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn emits_one_block_per_complete_chunk() {
    let cipher = test_cipher();

    for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 47, 160] {
        let input = patterned_input(len);
        let mut output = Vec::new();

        let blocks = encrypt_chunked(&cipher, Cursor::new(&input), &mut output).unwrap();

        assert_eq!(blocks, len / 16, "block count for input length {}", len);
        assert_eq!(output.len(), (len / 16) * 16, "output size for input length {}", len);
    }
}

#[test]
fn output_blocks_match_single_block_encryption() {
    let cipher = test_cipher();
    let input = patterned_input(71); // 4 complete blocks + 7 trailing bytes
    let mut output = Vec::new();

    encrypt_chunked(&cipher, Cursor::new(&input), &mut output).unwrap();

    for (chunk, encrypted) in input.chunks_exact(16).zip(output.chunks_exact(16)) {
        let mut expected = [0u8; 16];
        expected.copy_from_slice(chunk);
        cipher.encrypt_block(&mut expected).unwrap();
        assert_eq!(encrypted, &expected[..]);
    }
}

#[test]
fn trailing_partial_chunk_is_dropped_without_error() {
    let cipher = test_cipher();
    let mut input = patterned_input(32);
    input.extend_from_slice(&[0xEE; 9]); // partial trailing chunk

    let mut output = Vec::new();
    let blocks = encrypt_chunked(&cipher, Cursor::new(&input), &mut output).unwrap();

    assert_eq!(blocks, 2);
    assert_eq!(output.len(), 32);
}

#[test]
fn empty_input_produces_no_output() {
    let cipher = test_cipher();
    let mut output = Vec::new();

    let blocks = encrypt_chunked(&cipher, Cursor::new(&[] as &[u8]), &mut output).unwrap();

    assert_eq!(blocks, 0);
    assert!(output.is_empty());
}
