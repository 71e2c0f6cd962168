//! CLI smoke tests for simbuild.
//!
//! These tests only use `--dry-run` and `--help`, so they never need a real
//! compiler on the machine running them.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the simbuild binary.
fn simbuild_cmd() -> Command {
  cargo_bin_cmd!("simbuild")
}

/// Create a temp project with a single source file.
fn temp_project() -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::create_dir_all(temp.path().join("src")).unwrap();
  std::fs::write(temp.path().join("src").join("main.cpp"), "int main() { return 0; }\n").unwrap();
  temp
}

fn dry_run_json(temp: &TempDir, mode: Option<&str>) -> serde_json::Value {
  let mut cmd = simbuild_cmd();
  if let Some(mode) = mode {
    cmd.arg(mode);
  }
  let output = cmd
    .arg("-C")
    .arg(temp.path())
    .args(["--dry-run", "--output", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());
  serde_json::from_slice(&output.stdout).unwrap()
}

#[cfg(windows)]
const HOST_COMPILER: &str = "cl";
#[cfg(any(target_os = "linux", target_os = "macos"))]
const HOST_COMPILER: &str = "clang++";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  simbuild_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  simbuild_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("simbuild"));
}

// =============================================================================
// dry run
// =============================================================================

#[test]
#[cfg(any(windows, target_os = "linux", target_os = "macos"))]
fn dry_run_shows_host_compiler() {
  let temp = temp_project();

  simbuild_cmd()
    .arg("-C")
    .arg(temp.path())
    .arg("--dry-run")
    .assert()
    .success()
    .stdout(predicate::str::contains("Compiler"))
    .stdout(predicate::str::contains(HOST_COMPILER));
}

#[test]
fn dry_run_does_not_touch_build_dir() {
  let temp = temp_project();

  simbuild_cmd()
    .arg("-C")
    .arg(temp.path())
    .arg("--dry-run")
    .assert()
    .success();

  assert!(!temp.path().join("build").exists());
}

#[test]
fn release_literal_selects_release() {
  let temp = temp_project();
  let report = dry_run_json(&temp, Some("release"));
  assert_eq!(report["config"]["mode"], "release");
}

#[test]
fn other_mode_values_select_debug() {
  let temp = temp_project();
  for mode in [None, Some("Release"), Some("fast"), Some("debug")] {
    let report = dry_run_json(&temp, mode);
    assert_eq!(report["config"]["mode"], "debug", "{mode:?}");
  }
}

#[test]
fn extra_positionals_are_ignored() {
  let temp = temp_project();

  let output = simbuild_cmd()
    .args(["release", "extra", "more"])
    .arg("-C")
    .arg(temp.path())
    .args(["--dry-run", "--output", "json"])
    .output()
    .unwrap();

  assert!(output.status.success());
  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["config"]["mode"], "release");
}

#[test]
fn empty_source_tree_warns_on_stderr() {
  let temp = TempDir::new().unwrap();

  simbuild_cmd()
    .arg("-C")
    .arg(temp.path())
    .arg("--dry-run")
    .assert()
    .success()
    .stdout(predicate::str::contains("Sources: 0"))
    .stderr(predicate::str::contains("No .cpp files under"));
}

#[test]
fn json_report_lists_sources_in_argv() {
  let temp = temp_project();
  let report = dry_run_json(&temp, None);

  assert_eq!(report["sources"].as_array().unwrap().len(), 1);
  let argv: Vec<&str> = report["argv"]
    .as_array()
    .unwrap()
    .iter()
    .map(|v| v.as_str().unwrap())
    .collect();
  assert_eq!(argv[0], report["config"]["compiler"].as_str().unwrap());
  assert!(argv.iter().any(|a| a.ends_with("main.cpp")));
}

#[test]
fn fingerprint_is_stable_across_runs() {
  let temp = temp_project();
  let first = dry_run_json(&temp, Some("release"));
  let second = dry_run_json(&temp, Some("release"));
  let debug = dry_run_json(&temp, None);

  assert_eq!(first["fingerprint"], second["fingerprint"]);
  assert_eq!(first["argv"], second["argv"]);
  assert_ne!(first["fingerprint"], debug["fingerprint"]);
}

#[test]
#[serial]
fn project_dir_from_environment() {
  let temp = temp_project();

  simbuild_cmd()
    .arg("--dry-run")
    .env("SIMBUILD_PROJECT_DIR", temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Sources: 1"));
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn nonexistent_project_dir_fails() {
  simbuild_cmd()
    .arg("-C")
    .arg("/nonexistent/simbuild/project")
    .arg("--dry-run")
    .assert()
    .failure()
    .stderr(predicate::str::contains("project directory"));
}

#[test]
fn invalid_output_format_fails() {
  simbuild_cmd()
    .args(["--dry-run", "--output", "yaml"])
    .assert()
    .failure();
}
