use crate::error::WhispercheckError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize console logging
///
/// Log lines go to stderr so the report on stdout stays machine-readable.
///
/// # Arguments
/// * `log_level` - Log level (trace, debug, info, warn, error)
pub fn setup_console_logging(log_level: &str) -> Result<(), WhispercheckError> {
    // Environment filter setup (RUST_LOG env var takes precedence)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(parse_log_level(log_level).to_string()));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| {
            WhispercheckError::config(format!("Failed to initialize logging: {}", e))
        })?;

    tracing::info!("Console logging initialized: level={}", log_level);

    Ok(())
}

/// Parse string to tracing Level
pub fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to INFO", level);
            Level::INFO
        }
    }
}
