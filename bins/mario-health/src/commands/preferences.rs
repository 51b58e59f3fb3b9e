//! User preference commands

use crate::commands::print_json;
use crate::context::AppContext;
use anyhow::Result;
use clap::Subcommand;
use mario_cli::output::{format_count, Status};
use mario_core::preferences::{
    add_saved_location, clear_user_preferences, remove_saved_location, update_user_preferences,
    user_preferences, MAX_SAVED_LOCATIONS,
};
use owo_colors::OwoColorize;

#[derive(Subcommand)]
pub enum PreferencesAction {
    /// Show the stored preferences merged over defaults
    Show,

    /// Change search defaults and notification settings
    Set {
        /// Default ZIP code
        #[arg(long)]
        zip: Option<String>,

        /// Default search radius in miles
        #[arg(long)]
        radius: Option<u32>,

        /// ISO 639-1 language code
        #[arg(long)]
        language: Option<String>,

        /// Preferred insurance carriers (replaces the current list)
        #[arg(long, num_args = 1..)]
        carriers: Option<Vec<String>>,

        /// Email notifications
        #[arg(long)]
        email: Option<bool>,

        /// Text message notifications
        #[arg(long)]
        sms: Option<bool>,
    },

    /// Save a named location (the oldest is dropped beyond the limit)
    AddLocation {
        name: String,
        zip: String,

        /// Search radius in miles (defaults to the preferred radius)
        #[arg(short, long)]
        radius: Option<u32>,
    },

    /// Forget a saved location by id
    RemoveLocation {
        id: String,
    },

    /// Reset every preference to its default
    Clear,
}

/// Run preferences command
pub fn run(ctx: &AppContext, action: PreferencesAction) -> Result<()> {
    let mut store = ctx.open_store()?;

    match action {
        PreferencesAction::Show => {
            let preferences = user_preferences(&store)?;

            if ctx.is_json() {
                return print_json(&preferences);
            }

            Status::header("Preferences");
            println!("  {:<12} {}", "ZIP", preferences.default_zip.as_deref().unwrap_or("-"));
            println!("  {:<12} {} miles", "Radius", preferences.default_radius);
            println!("  {:<12} {}", "Language", preferences.language);
            let carriers = if preferences.preferred_insurance_carriers.is_empty() {
                "-".to_string()
            } else {
                preferences.preferred_insurance_carriers.join(", ")
            };
            println!("  {:<12} {}", "Insurance", carriers);
            println!(
                "  {:<12} email {}, sms {}",
                "Notify",
                on_off(preferences.notifications.email),
                on_off(preferences.notifications.sms)
            );

            if !preferences.saved_locations.is_empty() {
                Status::header(&format!(
                    "{} (max {})",
                    format_count(preferences.saved_locations.len(), "saved location", "saved locations"),
                    MAX_SAVED_LOCATIONS
                ));
                for location in &preferences.saved_locations {
                    println!(
                        "  {:<16} {} within {} miles  {}",
                        location.name,
                        location.zip,
                        location.radius,
                        location.id.dimmed()
                    );
                }
            }
        }

        PreferencesAction::Set { zip, radius, language, carriers, email, sms } => {
            if radius == Some(0) {
                return Err(mario_core::Error::invalid_input("Radius must be greater than zero").into());
            }

            let saved = update_user_preferences(&mut store, |p| {
                if let Some(zip) = zip {
                    p.default_zip = Some(zip);
                }
                if let Some(radius) = radius {
                    p.default_radius = radius;
                }
                if let Some(language) = language {
                    p.language = language;
                }
                if let Some(carriers) = carriers {
                    p.preferred_insurance_carriers = carriers;
                }
                if let Some(email) = email {
                    p.notifications.email = email;
                }
                if let Some(sms) = sms {
                    p.notifications.sms = sms;
                }
            })?;

            if ctx.is_json() {
                return print_json(&saved);
            }
            Status::success("Preferences saved");
        }

        PreferencesAction::AddLocation { name, zip, radius } => {
            let radius = match radius {
                Some(radius) => radius,
                None => user_preferences(&store)?.default_radius,
            };
            let location = add_saved_location(&mut store, &name, &zip, radius)?;

            if ctx.is_json() {
                return print_json(&location);
            }
            Status::success(&format!("Saved {} ({})", location.name, location.zip));
        }

        PreferencesAction::RemoveLocation { id } => {
            let removed = remove_saved_location(&mut store, &id)?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "removed": removed }));
            }

            if removed {
                Status::success("Location removed");
            } else {
                Status::warning(&format!("No saved location with id {}", id));
            }
        }

        PreferencesAction::Clear => {
            clear_user_preferences(&mut store)?;

            if ctx.is_json() {
                return print_json(&serde_json::json!({ "cleared": true }));
            }
            Status::success("Preferences reset to defaults");
        }
    }

    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
