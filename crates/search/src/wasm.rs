//! WASM bindings for the search helpers.
//!
//! Catalog data crosses the boundary as JSON strings using the same
//! camelCase field names as the search API.

use wasm_bindgen::prelude::*;

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::edit_distance(a, b)
}

/// Case-insensitive similarity between two strings (0-1).
#[wasm_bindgen]
pub fn similarity(a: &str, b: &str) -> f64 {
    crate::similarity(a, b)
}

/// Find the closest match for a query.
///
/// # Arguments
/// * `query` - Text typed by the user
/// * `candidates_json` - JSON array of candidate strings
/// * `threshold` - Minimum score to accept
///
/// # Returns
/// The best candidate, or undefined when nothing qualifies
#[wasm_bindgen]
pub fn closest_match(query: &str, candidates_json: &str, threshold: f64) -> Result<Option<String>, JsValue> {
    let candidates: Vec<String> = serde_json::from_str(candidates_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    Ok(crate::find_closest_match(query, candidates.iter().map(String::as_str), threshold)
        .map(str::to_string))
}

/// Rank related procedures.
///
/// # Arguments
/// * `query` - Current search query
/// * `current_json` - JSON array of the results on screen
/// * `all_json` - JSON array of candidate results
/// * `limit` - Maximum number of suggestions
///
/// # Returns
/// JSON array of related procedures sorted by score
#[wasm_bindgen]
pub fn related_procedures(query: &str, current_json: &str, all_json: &str, limit: usize) -> Result<String, JsValue> {
    let current = crate::parse_catalog(current_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let all = crate::parse_catalog(all_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let related = crate::find_related(query, &current, &all, limit);

    serde_json::to_string(&related)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Procedures from one category, excluding the given ids.
#[wasm_bindgen]
pub fn related_by_category(category_slug: &str, exclude_json: &str, all_json: &str, limit: usize) -> Result<String, JsValue> {
    let exclude: Vec<String> = serde_json::from_str(exclude_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
    let all = crate::parse_catalog(all_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let related = crate::related_by_category(category_slug, exclude.as_slice(), &all, limit);

    serde_json::to_string(&related)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Wrap search terms in `<mark>` tags.
#[wasm_bindgen]
pub fn highlight(text: &str, terms_json: &str) -> String {
    let terms: Vec<String> = serde_json::from_str(terms_json).unwrap_or_default();
    crate::highlight_text(text, terms.as_slice())
}
