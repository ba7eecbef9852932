//! Whispercheck environment probe
//!
//! Read-only introspection of the Whisper support layer and the host
//! environment, rendered as a fixed six-line report on stdout.

pub mod report;

// Re-export main types
pub use report::{run, ProbeReport};

/// The rustc version this binary was built with.
///
/// Emitted by the build script; falls back to `"unknown"` when the
/// toolchain could not be probed.
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");
