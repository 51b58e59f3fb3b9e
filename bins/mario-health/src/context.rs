//! Shared state for command handlers

use crate::commands::OutputFormat;
use anyhow::{Context, Result};
use mario_core::config::ConfigSchema;
use mario_core::store::FileStore;
use mario_search::SearchResult;
use std::path::{Path, PathBuf};

/// Configuration and output settings passed to every command
pub struct AppContext {
    pub config: ConfigSchema,
    pub format: OutputFormat,
    store_path: PathBuf,
}

impl AppContext {
    pub fn new(config: ConfigSchema, format: OutputFormat, store_override: Option<PathBuf>) -> Self {
        let store_path = store_override.unwrap_or_else(|| config.storage.path.clone());
        Self {
            config,
            format,
            store_path,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Open the store holding history, compare selection and preferences
    pub fn open_store(&self) -> Result<FileStore> {
        Ok(FileStore::open(&self.store_path)?)
    }

    /// Read a JSON catalog file
    pub fn load_catalog(&self, path: &Path) -> Result<Vec<SearchResult>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;

        let catalog = mario_search::parse_catalog(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

        tracing::debug!(path = %path.display(), entries = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}
