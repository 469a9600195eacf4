//! Public API types for the blockcrypt library
//!
//! This crate provides the public API surface for the blockcrypt ecosystem:
//! the error types shared by every crate in the workspace and the secure
//! key container handed to the cipher implementations.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;

// Re-export error traits
pub use error::ResultExt;
