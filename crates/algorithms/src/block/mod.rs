//! Block cipher implementations
//!
//! This module contains the block cipher primitives of the workspace and the
//! traits they implement. Exactly one cipher variant exists today (AES with
//! a 128-bit key and 10 rounds); further key sizes would be additional
//! [`CipherAlgorithm`] implementations selected at construction, not a type
//! hierarchy.
//!
//! ## Example usage
//!
//! ```
//! use blockcrypt_algorithms::block::{Aes128, BlockCipher};
//! use api::SecretBytes;
//!
//! let key = SecretBytes::new([0u8; 16]);
//! let cipher = Aes128::new(&key);
//!
//! let mut block = [0u8; 16];
//! cipher.encrypt_block(&mut block).unwrap();
//! ```

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

pub mod aes;

// Re-exports
pub use aes::Aes128;

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers with type-level constraints
///
/// The trait surface is encryption-only; none of the primitives in this
/// workspace expose a decryption path.
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + AsMut<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
