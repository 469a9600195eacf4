//! Common implementations and shared functionality for the blockcrypt library
//!
//! This crate provides the secret-memory primitives used across the
//! blockcrypt workspace: fixed-size zeroizing buffers for expanded key
//! material, scope guards for sensitive intermediates, and the memory
//! barriers the cipher places around its table substitutions.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Re-export memory safety traits and utilities
pub use security::memory::SecureCompare;

// Re-export memory barrier utilities
pub use security::memory::barrier;
