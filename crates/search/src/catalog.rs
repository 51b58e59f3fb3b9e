//! Catalog records exchanged with the search API.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// One matched catalog procedure as returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Unique procedure identifier
    pub procedure_id: String,
    /// Display name
    pub procedure_name: String,
    /// URL-safe identifier
    pub procedure_slug: String,
    /// Coarse grouping slug
    pub category_slug: String,
    /// Coarse grouping display name
    pub category_name: String,
    /// Finer grouping slug, nested under the category
    pub family_slug: String,
    /// Finer grouping display name
    pub family_name: String,
}

/// A procedure suggested alongside the current results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedProcedure {
    /// Procedure identifier
    pub id: String,
    /// URL-safe identifier
    pub slug: String,
    /// Display name
    pub name: String,
    /// Category display name
    pub category: String,
    /// Family display name
    pub family: String,
    /// Relevance score (higher is better, unbounded)
    pub score: f64,
}

impl RelatedProcedure {
    /// Build a suggestion from a catalog record.
    pub fn from_result(result: &SearchResult, score: f64) -> Self {
        Self {
            id: result.procedure_id.clone(),
            slug: result.procedure_slug.clone(),
            name: result.procedure_name.clone(),
            category: result.category_name.clone(),
            family: result.family_name.clone(),
            score,
        }
    }
}

/// Parse a JSON array of catalog records.
pub fn parse_catalog(json: &str) -> Result<Vec<SearchResult>> {
    serde_json::from_str(json).map_err(SearchError::InvalidCatalog)
}

#[cfg(test)]
pub(crate) fn procedure(id: &str, name: &str, category: &str, family: &str) -> SearchResult {
    SearchResult {
        procedure_id: id.to_string(),
        procedure_name: name.to_string(),
        procedure_slug: name.to_lowercase().replace(' ', "-"),
        category_slug: category.to_string(),
        category_name: category.to_uppercase(),
        family_slug: family.to_string(),
        family_name: family.to_uppercase(),
    }
}
