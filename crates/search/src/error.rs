//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing search input.
///
/// Scoring and ranking never fail; these only come from parsing catalog JSON
/// and compiling highlight patterns.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Highlight terms could not be compiled into a pattern
    #[error("Invalid highlight pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Catalog JSON could not be parsed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}

/// Error code for integration with mario-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Highlight pattern error
    InvalidPattern = 11001,
    /// Catalog parsing error
    InvalidCatalog = 11002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidPattern(_) => SearchErrorCode::InvalidPattern,
            SearchError::InvalidCatalog(_) => SearchErrorCode::InvalidCatalog,
        }
    }
}
