use std::fmt;

use serde::{Deserialize, Serialize};

/// CPU architecture families the resolver distinguishes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
  Amd64,
  Arm64,
  Other(String),
}

impl Arch {
  /// Detect the current CPU architecture at runtime
  pub fn current() -> Self {
    Self::from_name(std::env::consts::ARCH)
  }

  /// Parse an architecture name. Rust, Go and uname spellings are all accepted.
  pub fn from_name(name: &str) -> Self {
    match name.to_ascii_lowercase().as_str() {
      "x86_64" | "amd64" | "x64" => Self::Amd64,
      "aarch64" | "arm64" => Self::Arm64,
      other => Self::Other(other.to_string()),
    }
  }

  /// Returns the lowercase string identifier for this architecture
  pub fn as_str(&self) -> &str {
    match self {
      Self::Amd64 => "amd64",
      Self::Arm64 => "arm64",
      Self::Other(name) => name,
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
