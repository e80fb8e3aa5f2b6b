use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    pub source: SourceConfig,
    pub render: Option<RenderConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub chrome_path: Option<String>,
    pub idle_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    fn chrome_path(&self) -> Option<&str> {
        self.render.as_ref().and_then(|r| r.chrome_path.as_deref())
    }

    fn idle_timeout_secs(&self) -> u64 {
        self.render
            .as_ref()
            .and_then(|r| r.idle_timeout_seconds)
            .unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("job.name", &self.job.name)?;

        validation::validate_path("source.input", &self.source.input)?;
        validation::validate_file_extension("source.input", &self.source.input, &["html", "htm"])?;

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
            validation::validate_file_extension("output.path", path, &["pdf"])?;
        }

        if let Some(chrome) = self.chrome_path() {
            validation::validate_path("render.chrome_path", chrome)?;
        }

        validation::validate_range(
            "render.idle_timeout_seconds",
            self.idle_timeout_secs(),
            1,
            600,
        )?;

        Ok(())
    }
}
