use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // headless_chrome surfaces every browser failure as anyhow::Error
    #[error("Browser error: {0}")]
    BrowserError(anyhow::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}' = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Page processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

// anyhow::Error does not implement std::error::Error, so thiserror cannot
// derive this conversion with #[from].
impl From<anyhow::Error> for PdfError {
    fn from(err: anyhow::Error) -> Self {
        PdfError::BrowserError(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Browser,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PdfError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PdfError::IoError(_) => ErrorCategory::Input,
            PdfError::BrowserError(_) => ErrorCategory::Browser,
            PdfError::TomlError(_)
            | PdfError::ConfigError { .. }
            | PdfError::MissingConfigError { .. }
            | PdfError::InvalidConfigValueError { .. }
            | PdfError::ValidationError { .. } => ErrorCategory::Configuration,
            PdfError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 缺少瀏覽器運行環境屬於系統層級問題
            PdfError::BrowserError(_) => ErrorSeverity::Critical,
            PdfError::IoError(_) => ErrorSeverity::High,
            PdfError::TomlError(_)
            | PdfError::ConfigError { .. }
            | PdfError::MissingConfigError { .. }
            | PdfError::InvalidConfigValueError { .. }
            | PdfError::ValidationError { .. } => ErrorSeverity::High,
            PdfError::ProcessingError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PdfError::IoError(_) => {
                "Check that the input HTML file exists and the output directory is writable"
            }
            PdfError::BrowserError(_) => {
                "Install Chrome or Chromium, or point --chrome-path at the browser binary"
            }
            PdfError::TomlError(_) => "Check the TOML syntax of the job file",
            PdfError::ConfigError { .. }
            | PdfError::MissingConfigError { .. }
            | PdfError::InvalidConfigValueError { .. }
            | PdfError::ValidationError { .. } => {
                "Review the command line flags or the job file values"
            }
            PdfError::ProcessingError { .. } => {
                "Re-run the conversion; if the page loads slowly, raise the idle timeout"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PdfError::IoError(e) => format!("File operation failed: {}", e),
            PdfError::BrowserError(e) => format!("Could not drive the headless browser: {}", e),
            PdfError::TomlError(e) => format!("The job file is not valid TOML: {}", e),
            PdfError::ConfigError { message } => format!("Configuration problem: {}", message),
            PdfError::MissingConfigError { field } => {
                format!("The required setting '{}' is missing", field)
            }
            PdfError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            PdfError::ProcessingError { message } => {
                format!("The page could not be converted: {}", message)
            }
            PdfError::ValidationError { message } => format!("Invalid configuration: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, PdfError>;
