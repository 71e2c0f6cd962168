//! Types produced and consumed by the configuration resolver.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{ARTIFACT_NAME, BUILD_DIR, INCLUDE_DIR, LIB_DIR, SOURCE_DIR};
use crate::platform::Platform;
use crate::resolve::toolchain::Toolchain;
use crate::util::hash::Hashable;

/// Optimization profile for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  #[default]
  Debug,
  Release,
}

impl BuildMode {
  /// Select the mode from the optional positional argument.
  ///
  /// Only the exact literal `release` selects release; every other value,
  /// including absence, means debug.
  pub fn from_arg(arg: Option<&str>) -> Self {
    match arg {
      Some("release") => Self::Release,
      _ => Self::Debug,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "debug",
      Self::Release => "release",
    }
  }
}

impl fmt::Display for BuildMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Directory layout of the project being compiled.
///
/// All entries are relative to the project root; the compiler runs with the
/// root as its working directory, so flags stay short and reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectLayout {
  pub source_dir: String,
  pub include_dir: String,
  pub lib_dir: String,
  pub build_dir: String,
  pub artifact_name: String,
}

impl Default for ProjectLayout {
  fn default() -> Self {
    Self {
      source_dir: SOURCE_DIR.to_string(),
      include_dir: INCLUDE_DIR.to_string(),
      lib_dir: LIB_DIR.to_string(),
      build_dir: BUILD_DIR.to_string(),
      artifact_name: ARTIFACT_NAME.to_string(),
    }
  }
}

/// Non-fatal diagnostics raised while resolving a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ResolveWarning {
  /// No platform table entry matches the (os, arch) pair.
  #[error("unsupported platform {os}-{arch}")]
  UnsupportedPlatform { os: String, arch: String },
}

/// Everything needed to turn a source set into one compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
  pub platform: Platform,
  pub mode: BuildMode,
  pub toolchain: Toolchain,
  /// Executable name of the compiler driver.
  pub compiler: String,
  /// Flags placed before the source files, output flags first.
  pub compile_flags: Vec<String>,
  /// Flags placed after the source files.
  pub link_flags: Vec<String>,
  /// Artifact path relative to the project root.
  pub output_path: String,
  pub warnings: Vec<ResolveWarning>,
}

impl Hashable for BuildConfig {}

impl BuildConfig {
  /// True when the platform table had an entry for this configuration.
  pub fn is_supported(&self) -> bool {
    self.warnings.is_empty()
  }
}
