use std::io;
use std::path::{Path, PathBuf};

use crate::consts::PROJECT_DIR_ENV;

/// Returns the project root.
///
/// Precedence: the explicit path, then `SIMBUILD_PROJECT_DIR`, then the
/// current working directory. The result is canonicalized without the
/// Windows verbatim prefix so it can be handed to child processes.
pub fn project_dir(explicit: Option<&Path>) -> io::Result<PathBuf> {
  let dir = match explicit {
    Some(path) => path.to_path_buf(),
    None => match std::env::var_os(PROJECT_DIR_ENV) {
      Some(value) if !value.is_empty() => PathBuf::from(value),
      _ => std::env::current_dir()?,
    },
  };
  dunce::canonicalize(&dir)
}
