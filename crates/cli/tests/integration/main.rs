//! Integration tests that run simbuild against a fake compiler.
//!
//! The fake is a shell script named `clang++`, so these only run where the
//! host resolves to the clang toolchain.

#![cfg(all(unix, any(target_os = "linux", target_os = "macos")))]

mod build_tests;
mod common;
