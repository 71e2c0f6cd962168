//! Implementation of the default `simbuild` command.
//!
//! Resolves the build configuration for the host platform, then either prints
//! the plan (`--dry-run`) or compiles the project once and hands back the
//! compiler's exit code.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use simbuild_lib::execute::{self, BuildPlan, BuildRequest};
use simbuild_lib::platform::{Platform, paths::project_dir};
use simbuild_lib::resolve::{BuildConfig, BuildMode, ProjectLayout};
use simbuild_lib::util::hash::Hashable;

use crate::output::{
  OutputFormat, format_duration, print_command, print_error, print_info, print_json, print_stat, print_success,
  print_warning,
};

pub struct BuildArgs<'a> {
  pub mode: Option<&'a str>,
  pub project_dir: Option<&'a Path>,
  pub dry_run: bool,
  pub verbose: bool,
  pub output: OutputFormat,
}

#[derive(Serialize)]
struct PlanReport<'a> {
  root: &'a Path,
  fingerprint: String,
  config: &'a BuildConfig,
  sources: &'a [PathBuf],
  command: String,
  argv: Vec<String>,
}

/// Run the build and return the process exit code.
pub fn cmd_build(args: BuildArgs<'_>) -> Result<i32> {
  let mode = BuildMode::from_arg(args.mode);
  let platform = Platform::current();
  let root = project_dir(args.project_dir).context("Failed to locate project directory")?;

  let request = BuildRequest {
    root,
    mode,
    layout: ProjectLayout::default(),
  };

  info!(platform = %platform, mode = %mode, root = %request.root.display(), "starting build");

  let plan = execute::prepare(&request, &platform).context("Failed to prepare build")?;
  if plan.sources.is_empty() {
    print_warning(&format!(
      "No .cpp files under {}",
      request.root.join(&request.layout.source_dir).display()
    ));
  }

  if args.dry_run {
    report_plan(&request, &plan, args.output)?;
    return Ok(0);
  }

  print_info("Compiling...");
  if args.verbose {
    print_command(&plan.command.to_string());
  }

  let start = Instant::now();
  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;
  let outcome = rt
    .block_on(execute::execute(&request, plan))
    .context("Build failed")?;

  if outcome.is_success() {
    print_success(&format!(
      "Built {} in {}",
      outcome.plan.config.output_path,
      format_duration(start.elapsed())
    ));
  } else {
    print_error(&format!(
      "{} exited with code {}",
      outcome.plan.config.compiler,
      outcome.exit_code()
    ));
  }

  Ok(outcome.exit_code())
}

fn report_plan(request: &BuildRequest, plan: &BuildPlan, output: OutputFormat) -> Result<()> {
  let fingerprint = plan
    .config
    .compute_hash()
    .context("Failed to fingerprint configuration")?
    .0;

  if output.is_json() {
    return print_json(&PlanReport {
      root: &request.root,
      fingerprint,
      config: &plan.config,
      sources: &plan.sources,
      command: plan.command.to_string(),
      argv: plan.command.argv_lossy(),
    });
  }

  let config = &plan.config;
  print_info("Dry run - nothing will be compiled");
  print_stat("Platform", &config.platform.to_string());
  print_stat("Mode", config.mode.as_str());
  print_stat("Compiler", &config.compiler);
  print_stat("Output", &config.output_path);
  print_stat("Supported", if config.is_supported() { "yes" } else { "no" });
  print_stat("Sources", &plan.sources.len().to_string());
  print_stat("Fingerprint", &fingerprint);
  println!();
  print_command(&plan.command.to_string());

  Ok(())
}
