//! Whisper support surface
//!
//! Owns the catalog of ggml Whisper models and the version identifier the
//! diagnostic report prints. Nothing here loads a model or touches the
//! filesystem.

pub mod models;

pub use models::{available_model_names, available_models, WhisperModel};

/// Version identifier of the Whisper support layer (from Cargo).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
