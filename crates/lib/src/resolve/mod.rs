//! Platform-conditioned build configuration resolver.
//!
//! [`resolve`] is a pure function of its inputs: the host platform, the build
//! mode and the project layout. It never fails. Unrecognized platforms get a
//! best-effort configuration without a library search path plus a single
//! [`ResolveWarning::UnsupportedPlatform`] diagnostic.

pub mod table;
pub mod toolchain;
pub mod types;

use tracing::{debug, warn};

use crate::platform::Platform;

pub use toolchain::Toolchain;
pub use types::{BuildConfig, BuildMode, ProjectLayout, ResolveWarning};

/// Resolve the compiler, flags and output path for a platform and mode.
pub fn resolve(platform: &Platform, mode: BuildMode, layout: &ProjectLayout) -> BuildConfig {
  let toolchain = Toolchain::for_os(&platform.os);

  let mut compile_flags = toolchain.output_flags(layout);
  compile_flags.push(toolchain.optimization_flag(mode).to_string());
  if mode == BuildMode::Debug {
    compile_flags.push(toolchain.debug_symbols_flag().to_string());
  }
  compile_flags.extend(toolchain.standard_flags().iter().map(|f| f.to_string()));
  compile_flags.push(toolchain.include_flag(&layout.source_dir));
  compile_flags.push(toolchain.include_flag(&layout.include_dir));

  let rule = table::lookup(platform);

  let mut link_flags: Vec<String> = toolchain.link_prefix().iter().map(|f| f.to_string()).collect();
  if let Some(rule) = rule {
    let search_dir = toolchain.join(&[&layout.lib_dir, rule.lib_subdir]);
    link_flags.push(toolchain.lib_search_flag(&search_dir));
  }
  link_flags.extend(toolchain.baseline_libs().iter().map(|f| f.to_string()));
  if let Some(rule) = rule {
    link_flags.extend(rule.libs.iter().map(|f| f.to_string()));
  }
  link_flags.extend(table::system_libs(&platform.os).iter().map(|f| f.to_string()));

  let mut warnings = Vec::new();
  if rule.is_none() {
    let warning = ResolveWarning::UnsupportedPlatform {
      os: platform.os.to_string(),
      arch: platform.arch.to_string(),
    };
    warn!(platform = %platform, "{warning}, building without a library search path");
    warnings.push(warning);
  }

  let config = BuildConfig {
    platform: platform.clone(),
    mode,
    toolchain,
    compiler: toolchain.compiler().to_string(),
    compile_flags,
    link_flags,
    output_path: toolchain.output_path(layout),
    warnings,
  };

  debug!(
    platform = %platform,
    mode = %mode,
    compiler = %config.compiler,
    output = %config.output_path,
    "resolved build configuration"
  );

  config
}
