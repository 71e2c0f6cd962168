//! Shared utilities.
//!
//! Configuration fingerprinting and test helpers.

pub mod hash;

#[cfg(test)]
pub mod testutil;
