//! Types for running a resolved build.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::execute::command::BuildCommand;
use crate::resolve::{BuildConfig, BuildMode, ProjectLayout};

/// Errors that stop a build before the compiler reports a result.
///
/// A compiler that runs and exits non-zero is not an error here; its status
/// is returned in [`BuildOutcome`] and passed through unchanged.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The compiler executable could not be found.
  #[error("toolchain not found: failed to launch `{compiler}`: {source}")]
  ToolchainNotFound {
    compiler: String,
    #[source]
    source: std::io::Error,
  },

  /// The compiler exists but could not be started.
  #[error("failed to launch `{compiler}`: {source}")]
  Spawn {
    compiler: String,
    #[source]
    source: std::io::Error,
  },

  /// The source tree could not be traversed.
  #[error("failed to walk source directory {}: {message}", .dir.display())]
  SourceWalk { dir: PathBuf, message: String },

  /// The build output directory could not be created.
  #[error("failed to create build directory {}: {source}", .dir.display())]
  CreateDir {
    dir: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// I/O error while waiting on the compiler.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// Inputs for one build run.
#[derive(Debug, Clone)]
pub struct BuildRequest {
  /// Project root; the compiler runs here.
  pub root: PathBuf,
  pub mode: BuildMode,
  pub layout: ProjectLayout,
}

/// Resolved configuration, sources and command, before anything is executed.
#[derive(Debug, Clone)]
pub struct BuildPlan {
  pub config: BuildConfig,
  pub sources: Vec<PathBuf>,
  pub command: BuildCommand,
}

/// Result of a completed compiler run.
#[derive(Debug)]
pub struct BuildOutcome {
  pub plan: BuildPlan,
  pub status: ExitStatus,
  /// Stale object files removed before compiling.
  pub objects_removed: usize,
}

impl BuildOutcome {
  /// The compiler's exit code; a signal-terminated compiler maps to 1.
  pub fn exit_code(&self) -> i32 {
    self.status.code().unwrap_or(1)
  }

  pub fn is_success(&self) -> bool {
    self.status.success()
  }
}
