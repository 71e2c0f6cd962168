//! Content fingerprints for resolved configurations.
//!
//! A fingerprint is a truncated SHA-256 of the JSON-serialized value. Two runs
//! that print the same fingerprint produced byte-identical flag sequences.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::consts::FINGERPRINT_LEN;

pub type HashError = serde_json::Error;

/// A truncated hash identifying a serialized value.
///
/// # Format
///
/// Lowercase hexadecimal, 20 characters, e.g. `"a1b2c3d4e5f6789012ab"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectHash(pub String);

impl std::fmt::Display for ObjectHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

pub trait Hashable: Serialize {
  fn compute_hash(&self) -> Result<ObjectHash, HashError> {
    let serialized = serde_json::to_string(self)?;
    let full = hex::encode(Sha256::digest(serialized.as_bytes()));
    Ok(ObjectHash(full[..FINGERPRINT_LEN].to_string()))
  }
}
