use crate::error::WhispercheckError;
use serde::{Deserialize, Serialize};

/// Whispercheck application configuration
///
/// Only affects logging. The diagnostic report itself does not vary with
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, WhispercheckError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), WhispercheckError> {
        if self.log_level.trim().is_empty() {
            return Err(WhispercheckError::config("Log level cannot be empty"));
        }

        Ok(())
    }
}
