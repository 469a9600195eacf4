//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of rounds for AES-128
pub const AES128_ROUNDS: usize = 10;

/// Number of round keys in an AES-128 key schedule
pub const AES128_ROUND_KEY_COUNT: usize = 11;

/// Size of the expanded AES-128 key schedule in bytes (11 round keys)
pub const AES128_EXPANDED_KEY_SIZE: usize = 176;
