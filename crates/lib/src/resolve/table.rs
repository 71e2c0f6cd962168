//! Declarative platform tables.
//!
//! Per-(os, arch) library selection lives in [`PLATFORM_RULES`]; per-OS
//! system libraries are an exhaustive match so a new `Os` variant cannot be
//! forgotten.

use crate::platform::{Arch, Os, Platform};

/// Link settings for one recognized (os, arch) combination.
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformRule {
  pub os: Os,
  pub arch: Arch,
  /// Subdirectory of the project's lib dir holding prebuilt libraries.
  pub lib_subdir: &'static str,
  /// Libraries only shipped for this combination.
  pub libs: &'static [&'static str],
}

pub static PLATFORM_RULES: &[PlatformRule] = &[
  PlatformRule {
    os: Os::Darwin,
    arch: Arch::Arm64,
    lib_subdir: "mac-arm64",
    libs: &["-lglfw3"],
  },
  PlatformRule {
    os: Os::Darwin,
    arch: Arch::Amd64,
    lib_subdir: "mac-amd64",
    libs: &["-lglfw3"],
  },
  PlatformRule {
    os: Os::Linux,
    arch: Arch::Amd64,
    lib_subdir: "linux-amd64",
    libs: &[],
  },
  PlatformRule {
    os: Os::Linux,
    arch: Arch::Arm64,
    lib_subdir: "linux-arm64",
    libs: &[],
  },
  PlatformRule {
    os: Os::Windows,
    arch: Arch::Amd64,
    lib_subdir: "windows-amd64",
    libs: &["glfw3_mt.lib"],
  },
];

/// Find the rule for a platform, if it is a recognized combination.
pub fn lookup(platform: &Platform) -> Option<&'static PlatformRule> {
  PLATFORM_RULES
    .iter()
    .find(|rule| rule.os == platform.os && rule.arch == platform.arch)
}

/// System frameworks and libraries the OS needs regardless of architecture.
pub fn system_libs(os: &Os) -> &'static [&'static str] {
  match os {
    Os::Darwin => &["-framework", "Cocoa", "-framework", "IOKit"],
    Os::Linux => &["-lGL", "-lm", "-lpthread", "-ldl", "-lrt", "-lX11"],
    Os::Windows => &["opengl32.lib", "gdi32.lib", "winmm.lib", "user32.lib", "shell32.lib"],
    Os::Other(_) => &[],
  }
}
