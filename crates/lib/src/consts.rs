/// Environment variable overriding the project root.
pub const PROJECT_DIR_ENV: &str = "SIMBUILD_PROJECT_DIR";

/// Name of the compiled simulation executable.
pub const ARTIFACT_NAME: &str = "robosim";

/// Directory holding the C++ sources, relative to the project root.
pub const SOURCE_DIR: &str = "src";

/// Directory holding public headers, relative to the project root.
pub const INCLUDE_DIR: &str = "include";

/// Directory holding prebuilt per-platform libraries.
pub const LIB_DIR: &str = "lib";

/// Build output directory, relative to the project root.
pub const BUILD_DIR: &str = "build";

/// Extension of the source files handed to the compiler.
pub const SOURCE_EXT: &str = "cpp";

/// Object file extensions removed from the build tree before compiling.
pub const OBJECT_EXTS: &[&str] = &["o", "obj"];

/// Compiler name used when the host OS has no known toolchain.
/// It is never found on PATH, so the launch fails loudly.
pub const UNSUPPORTED_COMPILER: &str = "badcxx";

/// Length of the truncated configuration fingerprint.
pub const FINGERPRINT_LEN: usize = 20;
