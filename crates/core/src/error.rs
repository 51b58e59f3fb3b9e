//! Error handling with context and recovery suggestions
//!
//! Every error carries a numeric code grouped by category, an optional
//! context line and an optional suggestion. [`ErrorReport`] is the
//! machine-readable form printed by `--format json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // IO errors (2xxx)
    /// Any other filesystem failure
    IoError = 2000,
    /// A file that had to exist was missing
    FileNotFound = 2001,
    /// The filesystem refused access
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    /// The configuration file could not be read
    ConfigError = 3000,
    /// An explicitly requested configuration file does not exist
    ConfigNotFound = 3001,
    /// The configuration file is not valid TOML for the schema
    ConfigParseError = 3002,
    /// A configuration value is out of range
    InvalidConfigValue = 3003,

    // Validation errors (6xxx)
    /// User input was rejected
    InvalidInput = 6000,

    // Storage errors (9xxx)
    /// The store file is not a JSON object
    StorageCorrupt = 9000,
    /// The store file could not be written
    StorageWriteFailed = 9001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            6 => "Validation",
            9 => "Storage",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// What was being done when the error happened
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Underlying error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
            exit_code: self.exit_code(),
        }
    }

    /// Exit code a CLI should use for this error
    pub fn exit_code(&self) -> i32 {
        match self.code.category() {
            "Configuration" => exit_codes::CONFIG_ERROR,
            "Validation" => exit_codes::VALIDATION_ERROR,
            "Storage" => exit_codes::STORAGE_ERROR,
            _ => exit_codes::FAILURE,
        }
    }

    /// The configuration file exists but could not be read
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// An explicitly named configuration file is missing
    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .mario-search.toml file or use --config to specify a path")
    }

    /// A configuration key holds an unusable value
    pub fn invalid_config_value(key: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfigValue,
            format!("Invalid value for {}: {}", key, reason.into()),
        )
    }

    /// User input was rejected
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// The store file holds something other than a JSON object
    pub fn storage_corrupt(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::StorageCorrupt,
            format!("Store file is not a JSON object: {}", path.as_ref().display()),
        )
        .with_suggestion("Delete the file to start with an empty store")
    }

    /// Writing the store failed
    pub fn storage_write(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageWriteFailed, message)
    }
}

/// Serializable error report for machine-readable output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Code name, e.g. `INVALID_INPUT`
    pub code: ErrorCode,
    /// Code as displayed, e.g. `E6000`
    pub code_str: String,
    /// Category of the code
    pub category: String,
    /// Human-readable message
    pub message: String,
    /// What was being done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Recovery suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Underlying error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Process exit code for this error
    pub exit_code: i32,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Unclassified failure
    pub const FAILURE: i32 = 1;
    /// Rejected input
    pub const VALIDATION_ERROR: i32 = 2;
    /// Unusable configuration
    pub const CONFIG_ERROR: i32 = 3;
    /// Unreadable or unwritable store
    pub const STORAGE_ERROR: i32 = 4;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::StorageCorrupt, format!("JSON parse error: {}", err))
            .with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context to the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::InvalidInput.to_string(), "E6000");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::InvalidConfigValue.category(), "Configuration");
        assert_eq!(ErrorCode::StorageWriteFailed.category(), "Storage");
    }

    #[test]
    fn test_io_error_codes() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::from(missing).code, ErrorCode::FileNotFound);

        let other = std::io::Error::new(std::io::ErrorKind::Other, "broken pipe");
        let err = Error::from(other);
        assert_eq!(err.code, ErrorCode::IoError);
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_error_exit_code() {
        assert_eq!(
            Error::invalid_config_value("search.related_limit", "must be > 0").exit_code(),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(Error::storage_write("disk full").exit_code(), exit_codes::STORAGE_ERROR);
        assert_eq!(Error::invalid_input("bad index").exit_code(), exit_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::storage_corrupt("/tmp/store.json").with_context("Opening search history");

        let json = serde_json::to_value(err.to_report()).unwrap();

        assert_eq!(json["code"], "STORAGE_CORRUPT");
        assert_eq!(json["code_str"], "E9000");
        assert_eq!(json["category"], "Storage");
        assert_eq!(json["exit_code"], 4);
        assert_eq!(json["context"], "Opening search history");
        assert!(json.get("source").is_none());
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::invalid_input("bad index"));
        let err = result.context("Removing history entry").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("Removing history entry"));
    }
}
