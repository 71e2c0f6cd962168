use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn successful_build_exits_zero() {
  let env = TestEnv::new();

  env
    .simbuild_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Compiling..."))
    .stdout(predicate::str::contains("Built build/robosim"));

  assert!(env.project_path().join("build").is_dir());
}

#[test]
fn compiler_exit_code_is_propagated() {
  let env = TestEnv::new();

  env.simbuild_cmd().env("FAKE_CXX_EXIT", "3").assert().code(3);
}

#[test]
fn compiler_receives_flags_sources_then_libraries() {
  let env = TestEnv::new();
  env.write_file("src/robosim/main.cpp", "");

  env.simbuild_cmd().arg("release").assert().success();

  let args = env.compiler_args();
  assert_eq!(args[0], "-obuild/robosim");
  assert!(args.contains(&"-O2".to_string()));
  assert!(!args.contains(&"-O0".to_string()));

  let first_source = args.iter().position(|a| a == "src/main.cpp").unwrap();
  let second_source = args.iter().position(|a| a == "src/robosim/main.cpp").unwrap();
  let raylib = args.iter().position(|a| a == "-lraylib").unwrap();
  let std_flag = args.iter().position(|a| a == "-std=c++20").unwrap();
  assert!(std_flag < first_source);
  assert!(first_source < second_source);
  assert!(second_source < raylib);
}

#[test]
fn debug_is_default() {
  let env = TestEnv::new();

  env.simbuild_cmd().assert().success();

  let args = env.compiler_args();
  assert!(args.contains(&"-O0".to_string()));
  assert!(args.contains(&"-g".to_string()));
}

#[test]
fn stale_objects_are_removed_before_compiling() {
  let env = TestEnv::new();
  env.write_file("build/main.o", "");
  env.write_file("build/sub/util.o", "");
  env.write_file("build/notes.txt", "keep");

  env.simbuild_cmd().assert().success();

  let build = env.project_path().join("build");
  assert!(!build.join("main.o").exists());
  assert!(!build.join("sub/util.o").exists());
  assert!(build.join("notes.txt").exists());
}

#[test]
fn verbose_prints_command_line() {
  let env = TestEnv::new();

  env
    .simbuild_cmd()
    .arg("--verbose")
    .assert()
    .success()
    .stdout(predicate::str::contains("clang++ -obuild/robosim"));
}

#[test]
fn missing_compiler_is_fatal() {
  let env = TestEnv::without_compiler();
  env.write_file("src/main.cpp", "");

  env
    .isolated_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("toolchain not found"));
}
