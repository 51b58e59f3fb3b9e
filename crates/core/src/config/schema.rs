//! Configuration schema definitions
//!
//! Every section falls back to defaults, so an empty file is valid.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// `[search]`
    #[serde(default)]
    pub search: SearchConfig,

    /// `[storage]`
    #[serde(default)]
    pub storage: StorageConfig,

    /// `[history]`
    #[serde(default)]
    pub history: HistoryConfig,

    /// `[compare]`
    #[serde(default)]
    pub compare: CompareConfig,

    /// `[logging]`
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Reject values the search helpers cannot work with
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("search.match_threshold", self.search.match_threshold),
            ("search.spellcheck_threshold", self.search.spellcheck_threshold),
        ] {
            // similarity plus the substring bonus never exceeds 1.3
            if !(0.0..=2.0).contains(&value) {
                return Err(Error::invalid_config_value(key, format!("{} is outside 0.0..=2.0", value)));
            }
        }

        for (key, value) in [
            ("search.related_limit", self.search.related_limit),
            ("history.max_items", self.history.max_items),
            ("compare.max_items", self.compare.max_items),
        ] {
            if value == 0 {
                return Err(Error::invalid_config_value(key, "must be greater than zero"));
            }
        }

        Ok(())
    }
}

/// Search and suggestion tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum score for "did you mean" matches
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,

    /// Minimum score for as-you-type spelling suggestions
    #[serde(default = "default_spellcheck_threshold")]
    pub spellcheck_threshold: f64,

    /// Queries shorter than this get no spelling suggestion
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Number of related procedures to show
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Known procedure names offered as corrections
    #[serde(default = "default_terms")]
    pub terms: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            spellcheck_threshold: default_spellcheck_threshold(),
            min_query_len: default_min_query_len(),
            related_limit: default_related_limit(),
            terms: default_terms(),
        }
    }
}

fn default_match_threshold() -> f64 {
    0.7
}

fn default_spellcheck_threshold() -> f64 {
    0.6
}

fn default_min_query_len() -> usize {
    3
}

fn default_related_limit() -> usize {
    5
}

fn default_terms() -> Vec<String> {
    vec![
        "MRI",
        "CT",
        "X-ray",
        "Ultrasound",
        "Blood test",
        "Mammogram",
        "Colonoscopy",
        "Endoscopy",
        "Surgery",
        "Physical exam",
        "Dental cleaning",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Local state storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON store file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mario-health")
        .join("store.json")
}

/// Search history retention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Number of searches kept
    #[serde(default = "default_history_max_items")]
    pub max_items: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_items: default_history_max_items(),
        }
    }
}

fn default_history_max_items() -> usize {
    10
}

/// Compare selection limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Number of procedures compared at once
    #[serde(default = "default_compare_max_items")]
    pub max_items: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_items: default_compare_max_items(),
        }
    }
}

fn default_compare_max_items() -> usize {
    5
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let schema: ConfigSchema = toml::from_str("").unwrap();
        assert_eq!(schema.search.match_threshold, 0.7);
        assert_eq!(schema.search.terms.len(), 11);
        assert_eq!(schema.history.max_items, 10);
        assert_eq!(schema.compare.max_items, 5);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_partial_section() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [search]
            related_limit = 8
            terms = ["Echocardiogram"]
            "#,
        )
        .unwrap();

        assert_eq!(schema.search.related_limit, 8);
        assert_eq!(schema.search.spellcheck_threshold, 0.6);
        assert_eq!(schema.search.terms, vec!["Echocardiogram".to_string()]);
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut schema = ConfigSchema::default();
        schema.compare.max_items = 0;

        let err = schema.validate().unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::InvalidConfigValue);
        assert!(err.message.contains("compare.max_items"));
    }

    #[test]
    fn test_validate_rejects_negative_threshold() {
        let mut schema = ConfigSchema::default();
        schema.search.match_threshold = -0.1;
        assert!(schema.validate().is_err());
    }
}
