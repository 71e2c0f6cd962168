mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cmd::{BuildArgs, cmd_build};
use output::OutputFormat;

/// simbuild - build the robosim simulator for the host platform
#[derive(Parser)]
#[command(name = "simbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Build mode; only the literal `release` enables optimizations
  mode: Option<String>,

  /// Further positionals are accepted and ignored
  #[arg(hide = true)]
  extra: Vec<String>,

  /// Project root (defaults to $SIMBUILD_PROJECT_DIR, then the current directory)
  #[arg(short = 'C', long)]
  project_dir: Option<PathBuf>,

  /// Print the resolved configuration and command without compiling
  #[arg(long)]
  dry_run: bool,

  /// Output format for --dry-run
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Print the compiler command line and debug logs
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  if !cli.extra.is_empty() {
    debug!(extra = ?cli.extra, "ignoring extra arguments");
  }

  let code = cmd_build(BuildArgs {
    mode: cli.mode.as_deref(),
    project_dir: cli.project_dir.as_deref(),
    dry_run: cli.dry_run,
    verbose: cli.verbose,
    output: cli.output,
  })?;

  if code != 0 {
    std::process::exit(code);
  }
  Ok(())
}
