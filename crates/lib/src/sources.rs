//! Source discovery and build-tree housekeeping.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::consts::{OBJECT_EXTS, SOURCE_EXT};
use crate::execute::types::BuildError;
use crate::resolve::ProjectLayout;

/// Exact, case-sensitive extension match: `main.CPP` is not a source.
fn has_extension(path: &Path, exts: &[&str]) -> bool {
  path
    .extension()
    .is_some_and(|e| exts.iter().any(|x| e == OsStr::new(x)))
}

/// Dot-prefixed files and directories below the walk root are skipped,
/// like a shell glob would.
fn is_hidden(entry: &DirEntry) -> bool {
  entry.depth() > 0 && entry.file_name().as_encoded_bytes().starts_with(b".")
}

/// Collect every source file under the layout's source dir, recursively.
///
/// Paths are relative to `root` and sorted, so the command line is the same
/// on every run. A missing source dir yields an empty set.
pub fn discover_sources(root: &Path, layout: &ProjectLayout) -> Result<Vec<PathBuf>, BuildError> {
  let source_root = root.join(&layout.source_dir);
  if !source_root.is_dir() {
    debug!(dir = %source_root.display(), "source directory missing");
    return Ok(Vec::new());
  }

  let mut sources = Vec::new();
  for entry in WalkDir::new(&source_root)
    .sort_by_file_name()
    .into_iter()
    .filter_entry(|e| !is_hidden(e))
  {
    let entry = entry.map_err(|e| BuildError::SourceWalk {
      dir: source_root.clone(),
      message: e.to_string(),
    })?;
    if !entry.file_type().is_file() || !has_extension(entry.path(), &[SOURCE_EXT]) {
      continue;
    }
    let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
    sources.push(rel.to_path_buf());
  }

  sources.sort();
  debug!(count = sources.len(), "discovered sources");
  Ok(sources)
}

/// Remove object files left in the build tree by a previous run.
///
/// Best-effort: unreadable entries and failed removals are logged and skipped.
/// Returns the number of files removed.
pub fn clean_stale_objects(root: &Path, layout: &ProjectLayout) -> usize {
  let build_root = root.join(&layout.build_dir);
  if !build_root.is_dir() {
    return 0;
  }

  let mut removed = 0;
  for entry in WalkDir::new(&build_root).into_iter().filter_entry(|e| !is_hidden(e)) {
    let entry = match entry {
      Ok(entry) => entry,
      Err(e) => {
        warn!(error = %e, "skipping unreadable build entry");
        continue;
      }
    };
    if !entry.file_type().is_file() || !has_extension(entry.path(), OBJECT_EXTS) {
      continue;
    }
    match fs::remove_file(entry.path()) {
      Ok(()) => {
        debug!(path = %entry.path().display(), "removed stale object");
        removed += 1;
      }
      Err(e) => warn!(path = %entry.path().display(), error = %e, "failed to remove stale object"),
    }
  }
  removed
}

/// Create the build output directory if it does not exist.
pub fn ensure_build_dir(root: &Path, layout: &ProjectLayout) -> Result<PathBuf, BuildError> {
  let dir = root.join(&layout.build_dir);
  fs::create_dir_all(&dir).map_err(|source| BuildError::CreateDir {
    dir: dir.clone(),
    source,
  })?;
  Ok(dir)
}
