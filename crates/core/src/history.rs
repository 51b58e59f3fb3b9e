//! Recent search history
//!
//! The most recent search comes first. Repeating a search moves it back to
//! the front instead of adding a duplicate.

use crate::error::{Error, Result};
use crate::store::{read_json, write_json, KeyValueStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Storage key for the history list
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";

/// Default number of searches kept
pub const DEFAULT_MAX_HISTORY_ITEMS: usize = 10;

/// One remembered search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    /// Text that was searched
    pub query: String,
    /// ZIP code or city the search was made for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Search history backed by a [`KeyValueStore`]
pub struct SearchHistory<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
    max_items: usize,
}

impl<'s, S: KeyValueStore + ?Sized> SearchHistory<'s, S> {
    /// Use `store` with the default size limit
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            max_items: DEFAULT_MAX_HISTORY_ITEMS,
        }
    }

    /// Override the number of searches kept
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Stored searches, most recent first
    pub fn entries(&self) -> Result<Vec<SearchHistoryItem>> {
        Ok(read_json(&*self.store, SEARCH_HISTORY_KEY)?.unwrap_or_default())
    }

    /// Record a search at the front of the history
    pub fn add(&mut self, query: &str, location: Option<&str>) -> Result<SearchHistoryItem> {
        let entry = SearchHistoryItem {
            query: query.to_string(),
            location: location.map(String::from),
            timestamp: Utc::now().timestamp_millis(),
        };

        let mut history = self.entries()?;
        history.retain(|item| !(item.query == entry.query && item.location == entry.location));
        history.insert(0, entry.clone());
        history.truncate(self.max_items);

        write_json(&mut *self.store, SEARCH_HISTORY_KEY, &history)?;
        Ok(entry)
    }

    /// Remove the entry at `index` (0 is the most recent)
    pub fn remove(&mut self, index: usize) -> Result<SearchHistoryItem> {
        let mut history = self.entries()?;
        if index >= history.len() {
            return Err(Error::invalid_input(format!(
                "History index {} out of range ({} entries)",
                index,
                history.len()
            )));
        }

        let removed = history.remove(index);
        write_json(&mut *self.store, SEARCH_HISTORY_KEY, &history)?;
        Ok(removed)
    }

    /// Forget every search
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(SEARCH_HISTORY_KEY)
    }
}
