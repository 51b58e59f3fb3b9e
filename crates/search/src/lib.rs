//! Procedure search helpers for Mario Health.
//!
//! This crate provides:
//! - Levenshtein edit distance and case-insensitive similarity
//! - "Did you mean" matching against known procedure names
//! - Related procedure ranking by taxonomy and word overlap
//! - Search term highlighting and in-result refinement
//!
//! Every scoring function is pure and infallible; the worst case is an
//! empty result.
//!
//! # Features
//!
//! - `parallel` (default): scores related candidates on the rayon pool.
//!   Output is identical to the sequential path; run both with
//!   `cargo test -p mario-search` and
//!   `cargo test -p mario-search --no-default-features`.
//! - `wasm`: `wasm-bindgen` exports for browser callers.
//!
//! # Example
//!
//! ```
//! use mario_search::{find_closest_match, DEFAULT_MATCH_THRESHOLD};
//!
//! let terms = ["MRI", "Mammogram", "Colonoscopy"];
//! assert_eq!(find_closest_match("colonoscpy", terms, DEFAULT_MATCH_THRESHOLD), Some("Colonoscopy"));
//! ```

mod catalog;
mod error;
mod fuzzy;
pub mod highlight;
mod related;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{parse_catalog, RelatedProcedure, SearchResult};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{
    edit_distance, find_closest_match, similarity, suggest, COMMON_MEDICAL_TERMS,
    DEFAULT_MATCH_THRESHOLD, SUBSTRING_BONUS,
};
pub use highlight::{highlight_text, refine_results, Highlighter, Segment};
pub use related::{
    find_related, name_similarity, related_by_category, CATEGORY_WEIGHT, DEFAULT_RELATED_LIMIT,
    FAMILY_WEIGHT, NAME_WEIGHT,
};
