//! Whisper model catalog
//!
//! Static, ordered catalog of the ggml Whisper model family. English-only
//! variants precede their multilingual counterparts, smallest first.

/// Whisper model information
#[derive(Debug, Clone)]
pub struct WhisperModel {
    /// Model name (e.g., "base", "small", "medium")
    pub name: String,

    /// File size in bytes
    pub size: u64,
}

impl WhisperModel {
    /// Get model filename
    pub fn filename(&self) -> String {
        format!("ggml-{}.bin", self.name)
    }

    /// Get size in MB
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

/// Available Whisper models
///
/// The order is stable between calls; callers rely on it when rendering
/// the list.
pub fn available_models() -> Vec<WhisperModel> {
    vec![
        WhisperModel {
            name: "tiny.en".to_string(),
            size: 75 * 1024 * 1024, // 75 MB
        },
        WhisperModel {
            name: "tiny".to_string(),
            size: 75 * 1024 * 1024, // 75 MB
        },
        WhisperModel {
            name: "base.en".to_string(),
            size: 142 * 1024 * 1024, // 142 MB
        },
        WhisperModel {
            name: "base".to_string(),
            size: 142 * 1024 * 1024, // 142 MB
        },
        WhisperModel {
            name: "small.en".to_string(),
            size: 466 * 1024 * 1024, // 466 MB
        },
        WhisperModel {
            name: "small".to_string(),
            size: 466 * 1024 * 1024, // 466 MB
        },
        WhisperModel {
            name: "medium.en".to_string(),
            size: 1500 * 1024 * 1024, // 1.5 GB
        },
        WhisperModel {
            name: "medium".to_string(),
            size: 1500 * 1024 * 1024, // 1.5 GB
        },
        WhisperModel {
            name: "large-v3".to_string(),
            size: 3100 * 1024 * 1024, // 3.1 GB
        },
        WhisperModel {
            name: "large-v3-turbo".to_string(),
            size: 1600 * 1024 * 1024, // 1.6 GB
        },
    ]
}

/// Available model names, in catalog order
pub fn available_model_names() -> Vec<String> {
    available_models().into_iter().map(|m| m.name).collect()
}
