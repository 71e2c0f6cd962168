//! Host platform detection and project paths.

pub mod arch;
pub mod os;
pub mod paths;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use arch::Arch;
pub use os::Os;

/// Platform key combining OS and architecture (e.g., "darwin-arm64")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
  pub os: Os,
  pub arch: Arch,
}

impl Platform {
  /// Create a new platform identifier
  pub fn new(os: Os, arch: Arch) -> Self {
    Self { os, arch }
  }

  /// Build a platform key from raw OS and architecture names
  pub fn from_names(os: &str, arch: &str) -> Self {
    Self::new(Os::from_name(os), Arch::from_name(arch))
  }

  /// Detect the host platform at runtime.
  ///
  /// Unknown systems are still returned (as `Other`); the resolver decides
  /// how to degrade.
  pub fn current() -> Self {
    Self::new(Os::current(), Arch::current())
  }

  /// Returns the platform key string (e.g., "darwin-arm64")
  pub fn key(&self) -> String {
    format!("{}-{}", self.os, self.arch)
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.key())
  }
}
