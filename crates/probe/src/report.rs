use std::env;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};
use whispercheck_common::Result;
use whispercheck_whisper as whisper;

/// Values read by the probe, one per report line.
///
/// Each value is queried once and never mutated; rendering the same report
/// twice produces identical output.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Toolchain version the binary was built with
    pub rust_version: String,

    /// Version reported by the Whisper support layer
    pub whisper_version: String,

    /// Working directory the process was launched from
    pub working_dir: PathBuf,

    /// Model names from the catalog, in catalog order
    pub model_names: Vec<String>,
}

impl ProbeReport {
    /// Perform the four read-only introspection queries, in report order.
    ///
    /// The working-directory lookup is the only call here that can fail.
    pub fn collect() -> Result<Self> {
        info!("Collecting environment report");

        let working_dir = env::current_dir()?;

        for model in whisper::available_models() {
            debug!("Catalog model {} ({:.1} MB)", model.name, model.size_mb());
        }

        Ok(Self {
            rust_version: crate::RUSTC_SEMVER.to_string(),
            whisper_version: whisper::VERSION.to_string(),
            working_dir,
            model_names: whisper::available_model_names(),
        })
    }

    /// Render the six report lines, in fixed order.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Whisper test script")?;
        writeln!(out, "Rust version: {}", self.rust_version)?;
        writeln!(out, "Whisper version: {}", self.whisper_version)?;
        writeln!(out, "Working directory: {}", self.working_dir.display())?;
        writeln!(out, "Available models: {:?}", self.model_names)?;
        writeln!(out, "Whisper seems to be working correctly!")?;

        Ok(())
    }
}

/// Collect the report and render it to `out`
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let report = ProbeReport::collect()?;
    report.write_to(out)?;

    info!("Environment report complete");

    Ok(())
}
