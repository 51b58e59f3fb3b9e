//! Sort preference commands

use crate::commands::print_json;
use crate::context::AppContext;
use anyhow::Result;
use clap::Subcommand;
use mario_cli::output::Status;
use mario_core::preferences::{save_sort_preference, sort_preference, SortOption};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Subcommand)]
pub enum SortAction {
    /// Show the saved sort order
    Get,

    /// Save a sort order (price-asc, price-desc, name-asc, name-desc, distance, rating)
    Set {
        option: String,
    },

    /// List the available sort orders
    Options,
}

#[derive(Debug, Serialize)]
struct SortOptionOutput {
    option: SortOption,
    label: &'static str,
}

impl From<SortOption> for SortOptionOutput {
    fn from(option: SortOption) -> Self {
        Self {
            option,
            label: option.label(),
        }
    }
}

/// Run sort command
pub fn run(ctx: &AppContext, action: SortAction) -> Result<()> {
    match action {
        SortAction::Get => {
            let store = ctx.open_store()?;
            let option = sort_preference(&store)?;

            if ctx.is_json() {
                return print_json(&SortOptionOutput::from(option));
            }
            println!("{} ({})", option, option.label().dimmed());
        }

        SortAction::Set { option } => {
            let option: SortOption = option.parse()?;
            let mut store = ctx.open_store()?;
            save_sort_preference(&mut store, option)?;

            if ctx.is_json() {
                return print_json(&SortOptionOutput::from(option));
            }
            Status::success(&format!("Results will be sorted by {}", option.label()));
        }

        SortAction::Options => {
            if ctx.is_json() {
                let options: Vec<SortOptionOutput> = SortOption::ALL.into_iter().map(SortOptionOutput::from).collect();
                return print_json(&options);
            }

            for option in SortOption::ALL {
                println!("  {:<12} {}", option.as_str(), option.label());
            }
        }
    }

    Ok(())
}
