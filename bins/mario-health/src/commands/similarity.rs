//! Distance, similarity and spelling suggestion commands

use crate::commands::print_json;
use crate::context::AppContext;
use anyhow::{Context, Result};
use mario_cli::output::{format_score, Status};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct DistanceOutput<'a> {
    a: &'a str,
    b: &'a str,
    distance: usize,
}

#[derive(Debug, Serialize)]
struct SimilarityOutput<'a> {
    a: &'a str,
    b: &'a str,
    similarity: f64,
}

#[derive(Debug, Serialize)]
struct SuggestOutput<'a> {
    query: &'a str,
    threshold: f64,
    suggestion: Option<&'a str>,
}

/// Run distance command
pub fn distance(ctx: &AppContext, a: &str, b: &str) -> Result<()> {
    let distance = mario_search::edit_distance(a, b);

    if ctx.is_json() {
        return print_json(&DistanceOutput { a, b, distance });
    }

    println!("{}", distance);
    Ok(())
}

/// Run similarity command
pub fn similarity(ctx: &AppContext, a: &str, b: &str) -> Result<()> {
    let similarity = mario_search::similarity(a, b);

    if ctx.is_json() {
        return print_json(&SimilarityOutput { a, b, similarity });
    }

    println!("{:.4}", similarity);
    Ok(())
}

/// Run suggest command
pub fn suggest(ctx: &AppContext, query: &str, threshold: Option<f64>, terms_file: Option<&Path>) -> Result<()> {
    let threshold = threshold.unwrap_or(ctx.config.search.spellcheck_threshold);

    let terms = match terms_file {
        Some(path) => read_terms(path)?,
        None => ctx.config.search.terms.clone(),
    };

    let suggestion = mario_search::suggest(
        query,
        terms.iter().map(String::as_str),
        threshold,
        ctx.config.search.min_query_len,
    );

    tracing::debug!(query, threshold, candidates = terms.len(), ?suggestion, "Spelling suggestion");

    if ctx.is_json() {
        return print_json(&SuggestOutput { query, threshold, suggestion });
    }

    match suggestion {
        Some(term) => println!("Did you mean {}?", term.bold()),
        None => Status::info(&format!(
            "No suggestion for \"{}\" (threshold {})",
            query,
            format_score(threshold)
        )),
    }
    Ok(())
}

fn read_terms(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read terms file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
