//! Shared test helpers for CLI integration tests.

use std::ffi::OsString;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Fake compiler: records its arguments one per line and exits with
/// `$FAKE_CXX_EXIT` (default 0).
const FAKE_COMPILER: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$FAKE_CXX_LOG"
exit "${FAKE_CXX_EXIT:-0}"
"#;

/// Isolated test environment.
///
/// Each test gets its own project tree and a private `bin` directory that is
/// put in front of `PATH`, holding a fake `clang++`.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create a project with one source file and a fake compiler on PATH.
  pub fn new() -> Self {
    let env = Self::without_compiler();
    env.write_file("src/main.cpp", "int main() { return 0; }\n");

    let compiler = env.bin_path().join("clang++");
    std::fs::write(&compiler, FAKE_COMPILER).unwrap();
    std::fs::set_permissions(&compiler, std::fs::Permissions::from_mode(0o755)).unwrap();
    env
  }

  /// Create an environment whose private bin directory is empty.
  pub fn without_compiler() -> Self {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("project")).unwrap();
    std::fs::create_dir_all(temp.path().join("bin")).unwrap();
    Self { temp }
  }

  /// Write a file relative to the project root.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.project_path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn project_path(&self) -> PathBuf {
    let p = self.temp.path().join("project");
    dunce::canonicalize(&p).unwrap_or(p)
  }

  pub fn bin_path(&self) -> PathBuf {
    self.temp.path().join("bin")
  }

  /// File the fake compiler writes its arguments to.
  pub fn log_path(&self) -> PathBuf {
    self.temp.path().join("cxx.log")
  }

  /// Arguments received by the fake compiler on its last run.
  pub fn compiler_args(&self) -> Vec<String> {
    std::fs::read_to_string(self.log_path())
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// PATH with the private bin directory first.
  fn path_var(&self) -> OsString {
    let mut paths = vec![self.bin_path()];
    if let Some(existing) = std::env::var_os("PATH") {
      paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).unwrap()
  }

  /// Get a pre-configured Command for the simbuild binary.
  ///
  /// - `-C`: the isolated project root
  /// - `PATH`: private bin directory first
  /// - `FAKE_CXX_LOG`: where the fake compiler records its arguments
  pub fn simbuild_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("simbuild");
    cmd.arg("-C").arg(self.project_path());
    cmd.env("PATH", self.path_var());
    cmd.env("FAKE_CXX_LOG", self.log_path());
    cmd.env_remove("SIMBUILD_PROJECT_DIR");
    cmd
  }

  /// Like [`simbuild_cmd`](Self::simbuild_cmd), but PATH holds only the
  /// private bin directory.
  pub fn isolated_cmd(&self) -> Command {
    let mut cmd = self.simbuild_cmd();
    cmd.env("PATH", self.bin_path());
    cmd
  }
}
