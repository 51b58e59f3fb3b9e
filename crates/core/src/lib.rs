//! Core utilities for Mario Health search tools
//!
//! This crate provides the shared, non-search functionality:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Storage**: A key-value store abstraction with memory and file backends
//! - **Search history**: Recent searches, most recent first
//! - **Compare selection**: Procedures picked for side-by-side comparison
//! - **Preferences**: The result sort order and user search defaults
//! - **Rewards**: Points earned for user actions
//!
//! # Example
//!
//! ```rust
//! use mario_core::history::SearchHistory;
//! use mario_core::preferences::{save_sort_preference, sort_preference, SortOption};
//! use mario_core::store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//!
//! SearchHistory::new(&mut store).add("mri brain", Some("10001")).unwrap();
//! save_sort_preference(&mut store, SortOption::Distance).unwrap();
//!
//! assert_eq!(sort_preference(&store).unwrap(), SortOption::Distance);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod compare;
pub mod config;
pub mod error;
pub mod history;
pub mod preferences;
pub mod rewards;
pub mod store;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::compare::{AddOutcome, CompareItem, CompareSelection};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::history::{SearchHistory, SearchHistoryItem};
    pub use crate::preferences::{
        save_sort_preference, sort_preference, user_preferences, update_user_preferences, SortOption,
        UserPreferences,
    };
    pub use crate::rewards::{RewardEvent, RewardEventType, Rewards};
    pub use crate::store::{FileStore, KeyValueStore, MemoryStore};
}
