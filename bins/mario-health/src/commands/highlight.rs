//! Highlight command

use crate::commands::print_json;
use crate::context::AppContext;
use anyhow::Result;
use mario_search::Highlighter;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SegmentOutput<'a> {
    text: &'a str,
    matched: bool,
}

/// Run highlight command
///
/// Text output marks matches in yellow; JSON output lists the segments
/// along with the `<mark>` markup.
pub fn run(ctx: &AppContext, text: &str, terms: &[String]) -> Result<()> {
    let highlighter = Highlighter::new(terms)?;

    if ctx.is_json() {
        let segments: Vec<SegmentOutput<'_>> = highlighter
            .segments(text)
            .into_iter()
            .map(|s| SegmentOutput { text: s.text, matched: s.matched })
            .collect();

        return print_json(&serde_json::json!({
            "html": highlighter.to_html(text),
            "segments": segments,
        }));
    }

    println!("{}", colorize(&highlighter, text));
    Ok(())
}

/// Render matches in black on yellow for the terminal
pub fn colorize(highlighter: &Highlighter, text: &str) -> String {
    let mut line = String::with_capacity(text.len());
    for segment in highlighter.segments(text) {
        if segment.matched {
            line.push_str(&segment.text.black().on_yellow().to_string());
        } else {
            line.push_str(segment.text);
        }
    }
    line
}
