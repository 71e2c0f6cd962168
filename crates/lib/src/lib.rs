//! simbuild-lib: build driver core for the robosim simulator
//!
//! This crate provides the pieces behind the `simbuild` binary:
//! - `Platform`: the (OS, architecture) key detected from the host
//! - `resolve`: pure mapping from platform and build mode to compiler, flags
//!   and output path
//! - `sources`: source discovery and stale object cleanup
//! - `execute`: command assembly and the single compiler invocation

pub mod consts;
pub mod execute;
pub mod platform;
pub mod resolve;
pub mod sources;
pub mod util;
