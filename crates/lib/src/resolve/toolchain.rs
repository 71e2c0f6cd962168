//! Compiler families and their flag spellings.
//!
//! The same semantic option (optimize, include a directory, name the output)
//! is spelled differently by `cl` and by GCC-compatible drivers. Call sites ask
//! the toolchain for the spelling instead of hard-coding it.

use serde::{Deserialize, Serialize};

use crate::consts::UNSUPPORTED_COMPILER;
use crate::platform::Os;
use crate::resolve::types::{BuildMode, ProjectLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
  /// Microsoft `cl` with MSVC flag syntax.
  Msvc,
  /// `clang++` with GCC-style flags.
  Clang,
  /// No known toolchain for the host OS. Spelled like GCC, launched as a
  /// sentinel that cannot be found.
  Unsupported,
}

impl Toolchain {
  pub fn for_os(os: &Os) -> Self {
    match os {
      Os::Windows => Self::Msvc,
      Os::Darwin | Os::Linux => Self::Clang,
      Os::Other(_) => Self::Unsupported,
    }
  }

  pub fn compiler(&self) -> &'static str {
    match self {
      Self::Msvc => "cl",
      Self::Clang => "clang++",
      Self::Unsupported => UNSUPPORTED_COMPILER,
    }
  }

  fn is_msvc(&self) -> bool {
    matches!(self, Self::Msvc)
  }

  /// Path separator of the toolchain's host convention
  pub fn separator(&self) -> char {
    if self.is_msvc() { '\\' } else { '/' }
  }

  /// Join path segments with the toolchain's separator.
  pub fn join(&self, parts: &[&str]) -> String {
    let sep = self.separator().to_string();
    parts
      .iter()
      .map(|p| p.trim_end_matches(['/', '\\']))
      .filter(|p| !p.is_empty())
      .collect::<Vec<_>>()
      .join(sep.as_str())
  }

  /// The single optimization flag for the mode.
  pub fn optimization_flag(&self, mode: BuildMode) -> &'static str {
    match (self.is_msvc(), mode) {
      (true, BuildMode::Release) => "/O2",
      (true, BuildMode::Debug) => "/Od",
      (false, BuildMode::Release) => "-O2",
      (false, BuildMode::Debug) => "-O0",
    }
  }

  /// Debug-symbol flag, only emitted in debug mode.
  pub fn debug_symbols_flag(&self) -> &'static str {
    if self.is_msvc() { "/Zi" } else { "-g" }
  }

  /// Language standard and warning flags.
  pub fn standard_flags(&self) -> &'static [&'static str] {
    if self.is_msvc() {
      &["/nologo", "/std:c++20", "/W4", "/EHsc", "/MT"]
    } else {
      &["-std=c++20", "-Wall", "-Wextra", "-pedantic"]
    }
  }

  pub fn include_flag(&self, dir: &str) -> String {
    if self.is_msvc() {
      format!("/I{}", self.join(&[dir]))
    } else {
      format!("-I{}", self.join(&[dir]))
    }
  }

  pub fn lib_search_flag(&self, dir: &str) -> String {
    if self.is_msvc() {
      format!("/LIBPATH:{dir}")
    } else {
      format!("-L{dir}")
    }
  }

  /// Tokens that must precede any linker input.
  ///
  /// `cl` forwards everything after `/link` to the linker.
  pub fn link_prefix(&self) -> &'static [&'static str] {
    if self.is_msvc() { &["/link"] } else { &[] }
  }

  /// Libraries every build links against: raylib for rendering, box2d for physics.
  pub fn baseline_libs(&self) -> &'static [&'static str] {
    if self.is_msvc() {
      &["raylib.lib", "box2d.lib"]
    } else {
      &["-lraylib", "-lbox2d"]
    }
  }

  /// Artifact path relative to the project root.
  pub fn output_path(&self, layout: &ProjectLayout) -> String {
    if self.is_msvc() {
      self.join(&[&layout.build_dir, &format!("{}.exe", layout.artifact_name)])
    } else {
      self.join(&[&layout.build_dir, &layout.artifact_name])
    }
  }

  /// Output flags: one combined `-o<path>` for GCC-style drivers, the
  /// `/Fe:` + `/Fo:` pair for `cl` so object files land in the build tree.
  pub fn output_flags(&self, layout: &ProjectLayout) -> Vec<String> {
    let output = self.output_path(layout);
    if self.is_msvc() {
      let obj_dir = format!("{}{}", self.join(&[&layout.build_dir]), self.separator());
      vec![format!("/Fe:{output}"), format!("/Fo:{obj_dir}")]
    } else {
      vec![format!("-o{output}")]
    }
  }
}
