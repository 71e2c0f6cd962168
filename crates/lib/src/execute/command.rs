//! Compiler command assembly and execution.
//!
//! The argument order is fixed: compile flags, then sources, then link flags.
//! `cl` treats everything after `/link` as linker input and GCC-style drivers
//! resolve libraries left to right, so sources must sit between the two.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info};

use crate::execute::types::BuildError;
use crate::resolve::BuildConfig;

/// A fully assembled compiler invocation.
///
/// Arguments are kept as `OsString` so source paths reach the compiler
/// byte-for-byte, even when they are not valid UTF-8. Text is only produced
/// for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
  pub program: String,
  pub args: Vec<OsString>,
}

impl BuildCommand {
  /// Assemble `[compiler] + compile_flags + sources + link_flags`.
  pub fn assemble(config: &BuildConfig, sources: &[PathBuf]) -> Self {
    let mut args = Vec::with_capacity(config.compile_flags.len() + sources.len() + config.link_flags.len());
    args.extend(config.compile_flags.iter().map(OsString::from));
    args.extend(sources.iter().map(|s| s.as_os_str().to_os_string()));
    args.extend(config.link_flags.iter().map(OsString::from));

    Self {
      program: config.compiler.clone(),
      args,
    }
  }

  /// Run the command in `cwd`, inheriting stdin, stdout and stderr, and wait
  /// for it to exit.
  pub async fn run(&self, cwd: &Path) -> Result<ExitStatus, BuildError> {
    info!(program = %self.program, args = self.args.len(), "invoking compiler");
    debug!(cwd = %cwd.display(), command = %self, "spawning process");

    let mut child = Command::new(&self.program)
      .args(&self.args)
      .current_dir(cwd)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .spawn()
      .map_err(|source| match source.kind() {
        ErrorKind::NotFound => BuildError::ToolchainNotFound {
          compiler: self.program.clone(),
          source,
        },
        _ => BuildError::Spawn {
          compiler: self.program.clone(),
          source,
        },
      })?;

    let status = child.wait().await?;
    debug!(status = ?status.code(), "compiler exited");
    Ok(status)
  }

  /// Program and arguments as text, for reports. Non-UTF-8 bytes are replaced.
  pub fn argv_lossy(&self) -> Vec<String> {
    std::iter::once(self.program.clone())
      .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
      .collect()
  }
}

fn quote(arg: &OsStr) -> String {
  let arg = arg.to_string_lossy();
  if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
    format!("\"{}\"", arg.replace('"', "\\\""))
  } else {
    arg.into_owned()
  }
}

impl fmt::Display for BuildCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", quote(OsStr::new(&self.program)))?;
    for arg in &self.args {
      write!(f, " {}", quote(arg))?;
    }
    Ok(())
  }
}
