//! Remembered result sort order

use crate::error::{Error, Result};
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key for the last chosen sort order
pub const SORT_PREFERENCE_KEY: &str = "lastSortPreference";

/// How search results are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Cheapest first
    #[default]
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Alphabetical
    NameAsc,
    /// Reverse alphabetical
    NameDesc,
    /// Nearest provider first
    Distance,
    /// Best rated first
    Rating,
}

impl SortOption {
    /// Every option, in menu order
    pub const ALL: [SortOption; 6] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::Distance,
        SortOption::Rating,
    ];

    /// Stored identifier
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::Distance => "distance",
            SortOption::Rating => "rating",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price (Low to High)",
            SortOption::PriceDesc => "Price (High to Low)",
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
            SortOption::Distance => "Distance (Nearest)",
            SortOption::Rating => "Rating (Highest)",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| {
                Error::invalid_input(format!("Unknown sort option: {}", s))
                    .with_suggestion("Use one of: price-asc, price-desc, name-asc, name-desc, distance, rating")
            })
    }
}

/// The last saved sort order, or [`SortOption::PriceAsc`]
pub fn sort_preference<S: KeyValueStore + ?Sized>(store: &S) -> Result<SortOption> {
    let Some(raw) = store.get(SORT_PREFERENCE_KEY)? else {
        return Ok(SortOption::default());
    };

    Ok(raw.parse::<SortOption>().unwrap_or_else(|_| {
        tracing::warn!(value = %raw, "Ignoring unknown stored sort preference");
        SortOption::default()
    }))
}

/// Remember `option` as the preferred sort order
pub fn save_sort_preference<S: KeyValueStore + ?Sized>(store: &mut S, option: SortOption) -> Result<()> {
    store.set(SORT_PREFERENCE_KEY, option.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_default_is_price_ascending() {
        let store = MemoryStore::new();
        assert_eq!(sort_preference(&store).unwrap(), SortOption::PriceAsc);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        save_sort_preference(&mut store, SortOption::Rating).unwrap();

        assert_eq!(store.get(SORT_PREFERENCE_KEY).unwrap().as_deref(), Some("rating"));
        assert_eq!(sort_preference(&store).unwrap(), SortOption::Rating);
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(SORT_PREFERENCE_KEY, "cheapest").unwrap();
        assert_eq!(sort_preference(&store).unwrap(), SortOption::PriceAsc);
    }

    #[test]
    fn test_parse_matches_serde_names() {
        for option in SortOption::ALL {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json.trim_matches('"'), option.as_str());
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert!("price".parse::<SortOption>().is_err());
    }
}
