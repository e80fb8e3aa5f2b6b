pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-pdf")]
#[command(about = "Render a local HTML page to a print-ready A4 PDF with headless Chrome")]
pub struct CliConfig {
    /// HTML page to convert
    #[arg(long, default_value = "resources/top-5-interference.html")]
    pub input: String,

    /// Output PDF path (defaults to the input path with a .pdf extension)
    #[arg(long)]
    pub output: Option<String>,

    /// Explicit Chrome/Chromium binary to launch
    #[arg(long)]
    pub chrome_path: Option<String>,

    /// Seconds to wait for the page to finish loading
    #[arg(long, default_value = "30")]
    pub idle_timeout: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn chrome_path(&self) -> Option<&str> {
        self.chrome_path.as_deref()
    }

    fn idle_timeout_secs(&self) -> u64 {
        self.idle_timeout
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_file_extension("input", &self.input, &["html", "htm"])?;

        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
            validation::validate_file_extension("output", output, &["pdf"])?;
        }

        if let Some(chrome) = &self.chrome_path {
            validation::validate_path("chrome_path", chrome)?;
        }

        validation::validate_range("idle_timeout", self.idle_timeout, 1, 600)?;

        Ok(())
    }
}
