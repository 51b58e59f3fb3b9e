//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use chrono::{Local, TimeZone};
use mario_search::RelatedProcedure;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a relevance score with at most two decimals
pub fn format_score(score: f64) -> String {
    let formatted = format!("{:.2}", score);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format a millisecond Unix timestamp in local time
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => "unknown time".to_string(),
    }
}

/// Format one ranked procedure as a table row (without colors)
pub fn format_related_row(rank: usize, procedure: &RelatedProcedure) -> String {
    format!(
        "{:>2}. {:<32} {:<18} {:<18} {:>6}",
        rank,
        procedure.name,
        procedure.category,
        procedure.family,
        format_score(procedure.score)
    )
}

/// Print ranked procedures as a table
pub fn print_related(title: &str, procedures: &[RelatedProcedure]) {
    Status::header(title);

    if procedures.is_empty() {
        println!("{}", "No related procedures found".dimmed());
        return;
    }

    println!(
        "{}",
        format!("    {:<32} {:<18} {:<18} {:>6}", "Procedure", "Category", "Family", "Score").dimmed()
    );
    for (i, procedure) in procedures.iter().enumerate() {
        println!("{}", format_related_row(i + 1, procedure));
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn related(score: f64) -> RelatedProcedure {
        RelatedProcedure {
            id: "p2".to_string(),
            slug: "mri-knee".to_string(),
            name: "MRI Knee".to_string(),
            category: "Radiology".to_string(),
            family: "MRI".to_string(),
            score,
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(10.0), "10");
        assert_eq!(format_score(9.5), "9.5");
        assert_eq!(format_score(3.666_666), "3.67");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn test_format_related_row() {
        let row = format_related_row(1, &related(9.0));
        assert!(row.starts_with(" 1. MRI Knee"));
        assert!(row.contains("Radiology"));
        assert!(row.trim_end().ends_with('9'));
    }

    #[test]
    fn test_format_timestamp_invalid() {
        assert_eq!(format_timestamp(i64::MAX), "unknown time");
        assert_eq!(format_timestamp(0).len(), "1970-01-01 00:00".len());
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "search", "searches"), "1 search");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "search", "searches"), "5 searches");
    }
}
