//! Reward point commands

use crate::commands::print_json;
use crate::context::AppContext;
use anyhow::Result;
use clap::Subcommand;
use mario_cli::output::{format_count, format_timestamp, Status};
use mario_core::rewards::{RewardEventType, Rewards};
use owo_colors::OwoColorize;

#[derive(Subcommand)]
pub enum RewardsAction {
    /// Show earned rewards and the point total
    List,

    /// Record a rewarded action (concierge, marioPick, prescription,
    /// profileComplete, firstSearch, firstBooking)
    Earn {
        event: String,
    },

    /// Show the point total
    Total,

    /// List the actions that earn points
    Events,

    /// Forget all rewards
    Clear,
}

/// Run rewards command
pub fn run(ctx: &AppContext, action: RewardsAction) -> Result<()> {
    let mut store = ctx.open_store()?;
    let mut rewards = Rewards::new(&mut store);

    match action {
        RewardsAction::List => {
            let history = rewards.history()?;
            let total = rewards.total_points()?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "total": total, "history": history }));
            }

            Status::header(&format!("{} MarioPoints", total));
            if history.is_empty() {
                Status::info("No rewards yet");
            }
            for event in &history {
                println!(
                    "  {:>5}  {:<24} {}",
                    format!("+{}", event.points).green(),
                    event.description,
                    format_timestamp(event.timestamp).dimmed()
                );
            }
            if !history.is_empty() {
                println!("{}", format_count(history.len(), "reward", "rewards").dimmed());
            }
        }

        RewardsAction::Earn { event } => {
            let event_type: RewardEventType = event.parse()?;
            let earned = rewards.earn(event_type)?;

            if ctx.is_json() {
                return print_json(&earned);
            }
            Status::success(&format!("{}: +{} MarioPoints", earned.description, earned.points));
        }

        RewardsAction::Total => {
            let total = rewards.total_points()?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "total": total }));
            }
            println!("{}", total);
        }

        RewardsAction::Clear => {
            rewards.clear()?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "cleared": true }));
            }
            Status::success("Rewards cleared");
        }

        RewardsAction::Events => {
            if ctx.is_json() {
                let events: Vec<serde_json::Value> = RewardEventType::ALL
                    .into_iter()
                    .map(|e| serde_json::json!({ "type": e, "points": e.points(), "description": e.description() }))
                    .collect();
                return print_json(&events);
            }

            for event in RewardEventType::ALL {
                println!("  {:<16} {:>4}  {}", event.as_str(), event.points(), event.description());
            }
        }
    }

    Ok(())
}
