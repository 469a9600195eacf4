//! # blockcrypt
//!
//! A modular implementation of the AES-128 single-block encryption primitive.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blockcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `block` (default): the block cipher primitives
//! - `std` (default): standard library support
//! - `alloc`: allocator support for `no_std` environments
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `blockcrypt-api`: error types and the `SecretBytes` key container
//! - `blockcrypt-common`: secret-memory primitives and barriers
//! - `blockcrypt-params`: published AES-128 constants
//! - `blockcrypt-algorithms`: the cipher itself

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use blockcrypt_api as api;
pub use blockcrypt_common as common;
pub use blockcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "block")]
pub use blockcrypt_algorithms as algorithms;

// Dependency re-exports for downstream key handling
pub use subtle;
pub use zeroize;

/// Common imports for blockcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the key container
    pub use crate::api::SecretBytes;

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecureZeroingType, ZeroizeGuard};

    // Conditional re-exports based on features
    #[cfg(feature = "block")]
    pub use crate::algorithms::block::{Aes128, BlockCipher, CipherAlgorithm};
}
