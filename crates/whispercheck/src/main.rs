use anyhow::Result;
use whispercheck_common::{logger, AppConfig};

fn main() -> Result<()> {
    // Command-line arguments are not part of the interface; anything
    // supplied is ignored.
    let config = AppConfig::from_env()?;
    logger::setup_console_logging(&config.log_level)?;

    tracing::info!("whispercheck starting...");
    tracing::info!("  Log level: {}", config.log_level);

    let stdout = std::io::stdout();
    whispercheck_probe::run(&mut stdout.lock())?;

    Ok(())
}
