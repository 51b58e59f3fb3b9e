//! Related procedure, category and refinement commands

use crate::commands::highlight::colorize;
use crate::commands::print_json;
use crate::context::AppContext;
use anyhow::{bail, Result};
use mario_cli::output::{format_count, print_related, Status};
use mario_search::{find_related, refine_results, related_by_category, SearchResult};
use mario_telemetry::timed_span;
use std::collections::HashSet;
use std::path::Path;

/// Run related command
///
/// The current results are the catalog entries named by `current_ids`, or
/// the entries matching the query when no ids are given.
pub fn run(
    ctx: &AppContext,
    catalog_path: &Path,
    query: &str,
    current_ids: &[String],
    limit: Option<usize>,
) -> Result<()> {
    let catalog = ctx.load_catalog(catalog_path)?;
    let limit = limit.unwrap_or(ctx.config.search.related_limit);

    let current: Vec<SearchResult> = if current_ids.is_empty() {
        refine_results(&catalog, query).into_iter().cloned().collect()
    } else {
        let wanted: HashSet<&str> = current_ids.iter().map(String::as_str).collect();
        let current: Vec<SearchResult> = catalog
            .iter()
            .filter(|r| wanted.contains(r.procedure_id.as_str()))
            .cloned()
            .collect();

        if current.len() < wanted.len() {
            Status::warning(&format!(
                "{} not found in catalog",
                format_count(wanted.len() - current.len(), "current id", "current ids")
            ));
        }
        current
    };

    let related = {
        timed_span!("find_related");
        find_related(query, &current, &catalog, limit)
    };

    if ctx.is_json() {
        return print_json(&related);
    }

    if current.is_empty() {
        Status::info("No current results, so nothing to relate to");
    }
    print_related(&format!("Related to \"{}\"", query), &related);
    Ok(())
}

/// Run by-category command
pub fn by_category(
    ctx: &AppContext,
    catalog_path: &Path,
    category: &str,
    exclude: &[String],
    limit: Option<usize>,
) -> Result<()> {
    let catalog = ctx.load_catalog(catalog_path)?;
    let limit = limit.unwrap_or(ctx.config.search.related_limit);

    let related = related_by_category(category, exclude, &catalog, limit);

    if ctx.is_json() {
        return print_json(&related);
    }

    print_related(&format!("More in {}", category), &related);
    Ok(())
}

/// Run refine command
pub fn refine(ctx: &AppContext, catalog_path: &Path, refinement: &str) -> Result<()> {
    if refinement.trim().is_empty() {
        bail!("Refinement must contain at least one word");
    }

    let catalog = ctx.load_catalog(catalog_path)?;
    let refined = refine_results(&catalog, refinement);

    if ctx.is_json() {
        return print_json(&refined);
    }

    let terms: Vec<&str> = refinement.split_whitespace().collect();
    let highlighter = mario_search::Highlighter::new(terms.as_slice())?;

    Status::header(&format!(
        "{} of {}",
        format_count(refined.len(), "result", "results"),
        catalog.len()
    ));
    for result in refined {
        println!(
            "  {}  ({} / {})",
            colorize(&highlighter, &result.procedure_name),
            result.category_name,
            result.family_name
        );
    }
    Ok(())
}
