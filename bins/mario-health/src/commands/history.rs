//! Search history commands

use crate::commands::print_json;
use crate::context::AppContext;
use anyhow::Result;
use clap::Subcommand;
use mario_cli::output::{format_count, format_timestamp, Status};
use mario_core::history::SearchHistory;
use owo_colors::OwoColorize;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Show recent searches, most recent first
    List,

    /// Record a search
    Add {
        query: String,

        /// ZIP code or city the search was made for
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Remove one search by its position in the list (0 is the most recent)
    Remove {
        index: usize,
    },

    /// Forget all searches
    Clear,
}

/// Run history command
pub fn run(ctx: &AppContext, action: HistoryAction) -> Result<()> {
    let mut store = ctx.open_store()?;
    let mut history = SearchHistory::new(&mut store).with_max_items(ctx.config.history.max_items);

    match action {
        HistoryAction::List => {
            let entries = history.entries()?;

            if ctx.is_json() {
                return print_json(&entries);
            }

            if entries.is_empty() {
                Status::info("No recent searches");
                return Ok(());
            }

            Status::header(&format_count(entries.len(), "recent search", "recent searches"));
            for (i, entry) in entries.iter().enumerate() {
                let location = entry
                    .location
                    .as_deref()
                    .map(|l| format!(" near {}", l))
                    .unwrap_or_default();
                println!(
                    "{:>3}  {}{}  {}",
                    i,
                    entry.query.bold(),
                    location,
                    format_timestamp(entry.timestamp).dimmed()
                );
            }
        }

        HistoryAction::Add { query, location } => {
            let query = query.trim();
            if query.is_empty() {
                return Err(mario_core::Error::invalid_input("Search query is empty").into());
            }

            let entry = history.add(query, location.as_deref())?;

            if ctx.is_json() {
                return print_json(&entry);
            }
            Status::success(&format!("Saved search \"{}\"", entry.query));
        }

        HistoryAction::Remove { index } => {
            let removed = history.remove(index)?;

            if ctx.is_json() {
                return print_json(&removed);
            }
            Status::success(&format!("Removed \"{}\"", removed.query));
        }

        HistoryAction::Clear => {
            history.clear()?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "cleared": true }));
            }
            Status::success("Search history cleared");
        }
    }

    Ok(())
}
