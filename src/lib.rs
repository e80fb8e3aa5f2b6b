pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::storage::LocalStorage;
pub use config::toml_config::TomlConfig;

pub use crate::core::{engine::ConvertEngine, pipeline::ChromePipeline, renderer::ChromeRenderer};
pub use domain::model::PdfSettings;
pub use utils::error::{PdfError, Result};
