//! Test utilities for simbuild-lib.

use std::path::Path;

/// Write a file relative to `root`, creating parent directories.
pub fn write_file(root: &Path, relative_path: &str, content: &str) {
  let path = root.join(relative_path);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(&path, content).unwrap();
}
