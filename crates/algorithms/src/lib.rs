//! Block cipher primitives with explicit key handling
//!
//! This crate implements the AES-128 single-block encryption primitive with
//! a focus on explicit key material (no ambient or process-global keys),
//! secret-memory hygiene, and conformance with the published FIPS-197 test
//! vectors.
//!
//! # Security Features
//!
//! - Key material is always an explicit input; expanded schedules live in
//!   zeroizing buffers and are wiped on drop
//! - The round transform contains no key- or data-dependent branching
//!   beyond its fixed loop bounds
//! - Substitution and round-constant tables are immutable process-wide
//!   statics fixed at compile time

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, BlockCipher, CipherAlgorithm};
