//! Build orchestration.
//!
//! A run is split in two so callers can show or inspect the plan before
//! anything touches the filesystem:
//!
//! 1. [`prepare`] resolves the configuration, discovers sources and assembles
//!    the command. Read-only.
//! 2. [`execute`] removes stale objects, ensures the build dir exists and runs
//!    the compiler once, returning its exit status.

pub mod command;
pub mod types;

use tracing::{info, warn};

use crate::platform::Platform;
use crate::resolve::resolve;
use crate::sources::{clean_stale_objects, discover_sources, ensure_build_dir};

pub use command::BuildCommand;
pub use types::{BuildError, BuildOutcome, BuildPlan, BuildRequest};

/// Resolve, discover and assemble without side effects.
pub fn prepare(request: &BuildRequest, platform: &Platform) -> Result<BuildPlan, BuildError> {
  let config = resolve(platform, request.mode, &request.layout);
  let sources = discover_sources(&request.root, &request.layout)?;
  if sources.is_empty() {
    let source_dir = request.root.join(&request.layout.source_dir);
    warn!(dir = %source_dir.display(), "no source files found");
  }
  let command = BuildCommand::assemble(&config, &sources);

  Ok(BuildPlan {
    config,
    sources,
    command,
  })
}

/// Run a prepared plan: clean, create the build dir, invoke the compiler.
pub async fn execute(request: &BuildRequest, plan: BuildPlan) -> Result<BuildOutcome, BuildError> {
  let objects_removed = clean_stale_objects(&request.root, &request.layout);
  ensure_build_dir(&request.root, &request.layout)?;

  let status = plan.command.run(&request.root).await?;
  info!(code = ?status.code(), success = status.success(), "build finished");

  Ok(BuildOutcome {
    plan,
    status,
    objects_removed,
  })
}

/// [`prepare`] followed by [`execute`].
pub async fn build(request: &BuildRequest, platform: &Platform) -> Result<BuildOutcome, BuildError> {
  let plan = prepare(request, platform)?;
  execute(request, plan).await
}
