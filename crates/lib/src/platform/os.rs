use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating system families the resolver distinguishes.
///
/// Anything that isn't Windows, macOS or Linux is carried as `Other` with its
/// original name so diagnostics can report what was actually detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Windows,
  Darwin,
  Linux,
  Other(String),
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Self {
    Self::from_name(std::env::consts::OS)
  }

  /// Parse an OS name, accepting both Rust (`macos`) and uname (`Darwin`) spellings.
  pub fn from_name(name: &str) -> Self {
    match name.to_ascii_lowercase().as_str() {
      "windows" => Self::Windows,
      "darwin" | "macos" => Self::Darwin,
      "linux" => Self::Linux,
      other => Self::Other(other.to_string()),
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &str {
    match self {
      Self::Windows => "windows",
      Self::Darwin => "darwin",
      Self::Linux => "linux",
      Self::Other(name) => name,
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
