//! Related procedure ranking.
//!
//! Suggestions are scored by taxonomy overlap with the current results
//! (family outweighs category) plus word overlap between the query and the
//! procedure name.

use crate::catalog::{RelatedProcedure, SearchResult};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Default number of suggestions returned.
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// Score added when a candidate shares a category with the current results.
pub const CATEGORY_WEIGHT: f64 = 3.0;

/// Score added when a candidate shares a family with the current results.
pub const FAMILY_WEIGHT: f64 = 5.0;

/// Multiplier applied to [`name_similarity`].
pub const NAME_WEIGHT: f64 = 2.0;

/// Tokens shorter than this are ignored by [`name_similarity`].
const MIN_TOKEN_LEN: usize = 3;

/// Word overlap between a query and a procedure name, in `[0, 1]`.
///
/// Both sides are split on whitespace and tokens of two characters or fewer
/// are dropped. A query token matches when it contains, or is contained in,
/// any name token; each query token counts at most once. The match count is
/// divided by the larger token count.
///
/// Comparison is case-sensitive; callers lower-case both sides first.
pub fn name_similarity(query: &str, name: &str) -> f64 {
    let query_tokens = significant_tokens(query);
    let name_tokens = significant_tokens(name);

    if query_tokens.is_empty() || name_tokens.is_empty() {
        return 0.0;
    }

    let matches = query_tokens
        .iter()
        .filter(|q| name_tokens.iter().any(|n| n.contains(**q) || q.contains(*n)))
        .count();

    matches as f64 / query_tokens.len().max(name_tokens.len()) as f64
}

fn significant_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

/// Taxonomy and identity sets derived from the current results.
struct RankingContext<'a> {
    query: String,
    categories: HashSet<&'a str>,
    families: HashSet<&'a str>,
    shown: HashSet<&'a str>,
}

impl<'a> RankingContext<'a> {
    fn new(query: &str, current: &'a [SearchResult]) -> Self {
        Self {
            query: query.to_lowercase(),
            categories: current.iter().map(|r| r.category_slug.as_str()).collect(),
            families: current.iter().map(|r| r.family_slug.as_str()).collect(),
            shown: current.iter().map(|r| r.procedure_id.as_str()).collect(),
        }
    }

    /// Score a candidate, or `None` if it is already shown or irrelevant.
    fn score(&self, candidate: &SearchResult) -> Option<f64> {
        if self.shown.contains(candidate.procedure_id.as_str()) {
            return None;
        }

        let mut score = 0.0;
        if self.categories.contains(candidate.category_slug.as_str()) {
            score += CATEGORY_WEIGHT;
        }
        if self.families.contains(candidate.family_slug.as_str()) {
            score += FAMILY_WEIGHT;
        }
        score += NAME_WEIGHT * name_similarity(&self.query, &candidate.procedure_name.to_lowercase());

        (score > 0.0).then_some(score)
    }
}

/// Find procedures related to the current search.
///
/// # Arguments
/// * `query` - The query that produced `current`
/// * `current` - Results already shown to the user (never suggested again)
/// * `all` - Universe of candidate procedures
/// * `limit` - Maximum number of suggestions
///
/// # Returns
/// Suggestions sorted by descending score. Ties keep the order in which
/// candidates first appeared in `all`. A candidate id that appears more than
/// once keeps its best score.
///
/// # Example
/// ```
/// use mario_search::{find_related, SearchResult};
///
/// let mri = |id: &str, name: &str| SearchResult {
///     procedure_id: id.into(),
///     procedure_name: name.into(),
///     procedure_slug: id.into(),
///     category_slug: "radiology".into(),
///     category_name: "Radiology".into(),
///     family_slug: "mri".into(),
///     family_name: "MRI".into(),
/// };
///
/// let current = vec![mri("p1", "MRI Brain")];
/// let all = vec![mri("p1", "MRI Brain"), mri("p2", "MRI Knee")];
///
/// let related = find_related("mri brain", &current, &all, 5);
/// assert_eq!(related.len(), 1);
/// assert_eq!(related[0].id, "p2");
/// ```
pub fn find_related(
    query: &str,
    current: &[SearchResult],
    all: &[SearchResult],
    limit: usize,
) -> Vec<RelatedProcedure> {
    if current.is_empty() || all.is_empty() {
        return Vec::new();
    }

    let context = RankingContext::new(query, current);
    let scores = score_candidates(&context, all);
    let ranked = merge_ranked(all, scores, limit);

    debug!(
        query,
        candidates = all.len(),
        returned = ranked.len(),
        "Ranked related procedures"
    );

    ranked
}

#[cfg(feature = "parallel")]
fn score_candidates(context: &RankingContext<'_>, all: &[SearchResult]) -> Vec<Option<f64>> {
    use rayon::prelude::*;
    all.par_iter().map(|candidate| context.score(candidate)).collect()
}

#[cfg(not(feature = "parallel"))]
fn score_candidates(context: &RankingContext<'_>, all: &[SearchResult]) -> Vec<Option<f64>> {
    all.iter().map(|candidate| context.score(candidate)).collect()
}

/// Keep the best score per id, sort, truncate.
///
/// Runs in input order so ties and duplicates resolve the same way however
/// the scores were computed.
fn merge_ranked(all: &[SearchResult], scores: Vec<Option<f64>>, limit: usize) -> Vec<RelatedProcedure> {
    let mut ranked: Vec<RelatedProcedure> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (candidate, score) in all.iter().zip(scores) {
        let Some(score) = score else { continue };

        match positions.get(candidate.procedure_id.as_str()) {
            Some(&pos) => {
                if score > ranked[pos].score {
                    ranked[pos] = RelatedProcedure::from_result(candidate, score);
                }
            }
            None => {
                positions.insert(candidate.procedure_id.as_str(), ranked.len());
                ranked.push(RelatedProcedure::from_result(candidate, score));
            }
        }
    }

    // Stable sort
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Procedures from the same category, in catalog order.
///
/// Fallback for when the current result set is not available. Every
/// suggestion gets a score of `1.0`.
pub fn related_by_category<S: AsRef<str>>(
    category_slug: &str,
    exclude_ids: &[S],
    all: &[SearchResult],
    limit: usize,
) -> Vec<RelatedProcedure> {
    all.iter()
        .filter(|p| p.category_slug == category_slug)
        .filter(|p| !exclude_ids.iter().any(|id| id.as_ref() == p.procedure_id))
        .take(limit)
        .map(|p| RelatedProcedure::from_result(p, 1.0))
        .collect()
}
