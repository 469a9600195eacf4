//! Published constant values for the blockcrypt library
//!
//! This crate holds the fixed, public parameters of the algorithms in the
//! blockcrypt workspace. It has no dependencies and is always `no_std`.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod symmetric;
