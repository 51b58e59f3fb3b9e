//! Search term highlighting and in-result refinement.

use crate::catalog::SearchResult;
use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// A slice of highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text of this segment
    pub text: &'a str,
    /// Whether the segment matched one of the terms
    pub matched: bool,
}

/// Case-insensitive matcher for a fixed set of search terms.
///
/// Terms are matched literally; regex metacharacters carry no meaning.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Compile a highlighter for `terms`. Empty terms are ignored.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = terms
            .iter()
            .map(|term| term.as_ref())
            .filter(|term| !term.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()?;

        Ok(Self { pattern: Some(pattern) })
    }

    /// Split `text` into alternating plain and matched segments.
    ///
    /// Joining the segment texts yields `text` unchanged.
    pub fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        if text.is_empty() {
            return Vec::new();
        }

        let Some(pattern) = &self.pattern else {
            return vec![Segment { text, matched: false }];
        };

        let mut segments = Vec::new();
        let mut last = 0;

        for m in pattern.find_iter(text) {
            if m.start() > last {
                segments.push(Segment { text: &text[last..m.start()], matched: false });
            }
            segments.push(Segment { text: m.as_str(), matched: true });
            last = m.end();
        }

        if last < text.len() {
            segments.push(Segment { text: &text[last..], matched: false });
        }

        segments
    }

    /// Wrap every match in `<mark>` tags.
    pub fn to_html(&self, text: &str) -> String {
        let mut html = String::with_capacity(text.len());
        for segment in self.segments(text) {
            if segment.matched {
                html.push_str("<mark>");
                html.push_str(segment.text);
                html.push_str("</mark>");
            } else {
                html.push_str(segment.text);
            }
        }
        html
    }
}

/// Split `text` into plain and matched segments for `terms`.
pub fn highlight_segments<'t, S: AsRef<str>>(text: &'t str, terms: &[S]) -> Result<Vec<Segment<'t>>> {
    Ok(Highlighter::new(terms)?.segments(text))
}

/// Wrap every occurrence of any term in `<mark>` tags.
///
/// Text is returned unchanged when the terms cannot be compiled.
pub fn highlight_text<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    match Highlighter::new(terms) {
        Ok(highlighter) => highlighter.to_html(text),
        Err(e) => {
            tracing::warn!(error = %e, "Highlight terms rejected");
            text.to_string()
        }
    }
}

/// Narrow a result list to entries matching every word of `refinement`.
///
/// A result matches a word when its procedure, category or family name
/// contains it, ignoring case.
pub fn refine_results<'a>(results: &'a [SearchResult], refinement: &str) -> Vec<&'a SearchResult> {
    let words: Vec<String> = refinement
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    results
        .iter()
        .filter(|result| {
            let haystack = format!(
                "{} {} {}",
                result.procedure_name, result.category_name, result.family_name
            )
            .to_lowercase();
            words.iter().all(|word| haystack.contains(word.as_str()))
        })
        .collect()
}
