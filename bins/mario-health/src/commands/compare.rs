//! Compare selection commands

use crate::commands::print_json;
use crate::context::AppContext;
use anyhow::Result;
use clap::Subcommand;
use mario_cli::output::{format_count, Status};
use mario_core::compare::{AddOutcome, CompareItem, CompareSelection};
use owo_colors::OwoColorize;

#[derive(Subcommand)]
pub enum CompareAction {
    /// Show the selected procedures
    List,

    /// Select a procedure
    Add {
        id: String,
        name: String,

        #[arg(short, long)]
        category: Option<String>,
    },

    /// Deselect a procedure
    Remove {
        id: String,
    },

    /// Deselect everything
    Clear,
}

/// Run compare command
pub fn run(ctx: &AppContext, action: CompareAction) -> Result<()> {
    let max_items = ctx.config.compare.max_items;
    let mut store = ctx.open_store()?;
    let mut selection = CompareSelection::new(&mut store).with_max_items(max_items);

    match action {
        CompareAction::List => {
            let items = selection.items()?;

            if ctx.is_json() {
                return print_json(&items);
            }

            if items.is_empty() {
                Status::info("Nothing selected for comparison");
                return Ok(());
            }

            Status::header(&format!("Comparing {} (max {})", format_count(items.len(), "procedure", "procedures"), max_items));
            for item in &items {
                let category = item.category.as_deref().unwrap_or("-");
                println!("  {:<12} {:<32} {}", item.id.dimmed(), item.name, category);
            }
        }

        CompareAction::Add { id, name, category } => {
            let mut item = CompareItem::new(id, name);
            if let Some(category) = category {
                item = item.with_category(category);
            }
            let label = item.name.clone();

            let outcome = selection.add(item)?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "added": outcome.is_added() }));
            }

            match outcome {
                AddOutcome::Added => Status::success(&format!("Added {} to compare", label)),
                AddOutcome::AlreadySelected => Status::warning(&format!("{} is already selected", label)),
                AddOutcome::SelectionFull => Status::warning(&format!(
                    "Compare selection is full ({} procedures); remove one first",
                    max_items
                )),
            }
        }

        CompareAction::Remove { id } => {
            let removed = selection.remove(&id)?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "removed": removed }));
            }

            if removed {
                Status::success(&format!("Removed {} from compare", id));
            } else {
                Status::warning(&format!("{} was not selected", id));
            }
        }

        CompareAction::Clear => {
            selection.clear()?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "cleared": true }));
            }
            Status::success("Compare selection cleared");
        }
    }

    Ok(())
}
