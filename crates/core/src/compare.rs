//! Procedures selected for side-by-side comparison

use crate::error::Result;
use crate::store::{read_json, write_json, KeyValueStore};
use serde::{Deserialize, Serialize};

/// Storage key for the selection list
pub const COMPARE_SELECTION_KEY: &str = "compareSelection";

/// Default maximum number of procedures compared at once
pub const DEFAULT_MAX_COMPARE_ITEMS: usize = 5;

/// A procedure picked for comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareItem {
    /// Procedure identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category display name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CompareItem {
    /// Item without a category
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
        }
    }

    /// Attach the category display name
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Result of adding an item to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended
    Added,
    /// An item with the same id is already selected
    AlreadySelected,
    /// The selection already holds the maximum number of items
    SelectionFull,
}

impl AddOutcome {
    /// Whether the selection changed
    pub fn is_added(self) -> bool {
        self == AddOutcome::Added
    }
}

/// Compare selection backed by a [`KeyValueStore`]
pub struct CompareSelection<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
    max_items: usize,
}

impl<'s, S: KeyValueStore + ?Sized> CompareSelection<'s, S> {
    /// Use `store` with the default size limit
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            max_items: DEFAULT_MAX_COMPARE_ITEMS,
        }
    }

    /// Override the maximum number of items
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Selected items in the order they were added
    pub fn items(&self) -> Result<Vec<CompareItem>> {
        let mut items: Vec<CompareItem> = read_json(&*self.store, COMPARE_SELECTION_KEY)?.unwrap_or_default();
        items.truncate(self.max_items);
        Ok(items)
    }

    /// Add an item unless it is already selected or the selection is full
    pub fn add(&mut self, item: CompareItem) -> Result<AddOutcome> {
        let mut items = self.items()?;

        if items.iter().any(|i| i.id == item.id) {
            return Ok(AddOutcome::AlreadySelected);
        }
        if items.len() >= self.max_items {
            return Ok(AddOutcome::SelectionFull);
        }

        items.push(item);
        self.save(&items)?;
        Ok(AddOutcome::Added)
    }

    /// Drop the item with `id`, returning whether it was selected
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let mut items = self.items()?;
        let before = items.len();
        items.retain(|i| i.id != id);

        if items.len() == before {
            return Ok(false);
        }
        self.save(&items)?;
        Ok(true)
    }

    /// Deselect everything
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(COMPARE_SELECTION_KEY)
    }

    fn save(&mut self, items: &[CompareItem]) -> Result<()> {
        let limited = &items[..items.len().min(self.max_items)];
        write_json(&mut *self.store, COMPARE_SELECTION_KEY, limited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_add_and_list() {
        let mut store = MemoryStore::new();
        let mut selection = CompareSelection::new(&mut store);

        let outcome = selection
            .add(CompareItem::new("p1", "MRI Brain").with_category("Radiology"))
            .unwrap();
        assert!(outcome.is_added());

        let items = selection.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category.as_deref(), Some("Radiology"));
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut store = MemoryStore::new();
        let mut selection = CompareSelection::new(&mut store);

        selection.add(CompareItem::new("p1", "MRI Brain")).unwrap();
        let outcome = selection.add(CompareItem::new("p1", "MRI Brain")).unwrap();

        assert_eq!(outcome, AddOutcome::AlreadySelected);
        assert_eq!(selection.items().unwrap().len(), 1);
    }

    #[test]
    fn test_add_rejects_when_full() {
        let mut store = MemoryStore::new();
        let mut selection = CompareSelection::new(&mut store).with_max_items(2);

        selection.add(CompareItem::new("p1", "MRI Brain")).unwrap();
        selection.add(CompareItem::new("p2", "CT Head")).unwrap();
        let outcome = selection.add(CompareItem::new("p3", "X-Ray Chest")).unwrap();

        assert_eq!(outcome, AddOutcome::SelectionFull);
    }

    #[test]
    fn test_items_truncates_oversized_storage() {
        let mut store = MemoryStore::new();
        let stored: Vec<CompareItem> = (0..8).map(|i| CompareItem::new(format!("p{}", i), "Lab")).collect();
        store.set(COMPARE_SELECTION_KEY, &serde_json::to_string(&stored).unwrap()).unwrap();

        let selection = CompareSelection::new(&mut store);
        assert_eq!(selection.items().unwrap().len(), DEFAULT_MAX_COMPARE_ITEMS);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = MemoryStore::new();
        let mut selection = CompareSelection::new(&mut store);

        selection.add(CompareItem::new("p1", "MRI Brain")).unwrap();
        selection.add(CompareItem::new("p2", "CT Head")).unwrap();

        assert!(selection.remove("p1").unwrap());
        assert!(!selection.remove("p1").unwrap());
        assert_eq!(selection.items().unwrap()[0].id, "p2");

        selection.clear().unwrap();
        assert!(selection.items().unwrap().is_empty());
    }
}
