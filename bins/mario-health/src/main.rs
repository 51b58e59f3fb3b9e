//! mario-health: procedure search helpers from the command line.
//!
//! Spelling suggestions, related procedure ranking, highlighting, and the
//! locally stored search history, compare selection, preferences and
//! reward points.

use clap::{Parser, Subcommand};
use mario_cli::output::Status;
use mario_core::config::Config;
use mario_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{compare, highlight, history, preferences, related, rewards, similarity, sort, OutputFormat};
use context::AppContext;

/// Procedure search helpers for Mario Health
#[derive(Parser)]
#[command(name = "mario-health")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to .mario-search.toml if present)
    #[arg(long, global = true, env = "MARIO_SEARCH_CONFIG")]
    config: Option<String>,

    /// Store file for history, compare selection and preferences
    #[arg(long, global = true, env = "MARIO_SEARCH_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit distance between two strings
    Distance {
        a: String,
        b: String,
    },

    /// Case-insensitive similarity between two strings (0-1)
    Similarity {
        a: String,
        b: String,
    },

    /// Suggest a spelling correction for a query
    Suggest {
        /// Text typed by the user
        query: String,

        /// Minimum score to accept (defaults to the configured spellcheck threshold)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// File with one candidate term per line (defaults to the configured terms)
        #[arg(long)]
        terms_file: Option<PathBuf>,
    },

    /// Rank procedures related to a search
    Related {
        /// JSON array of catalog results
        #[arg(short, long)]
        catalog: PathBuf,

        /// The search query
        #[arg(short, long)]
        query: String,

        /// Ids of the results currently shown (defaults to catalog entries matching the query)
        #[arg(long, num_args = 1..)]
        current: Vec<String>,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List procedures from one category
    ByCategory {
        /// JSON array of catalog results
        #[arg(short, long)]
        catalog: PathBuf,

        /// Category slug
        #[arg(long)]
        category: String,

        /// Procedure ids to leave out
        #[arg(long, num_args = 1..)]
        exclude: Vec<String>,

        /// Maximum number of procedures
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Narrow catalog results to those matching every word
    Refine {
        /// JSON array of catalog results
        #[arg(short, long)]
        catalog: PathBuf,

        /// Words to match
        refinement: String,
    },

    /// Mark search terms in text
    Highlight {
        text: String,

        /// Terms to mark
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// Manage recent searches
    History {
        #[command(subcommand)]
        action: history::HistoryAction,
    },

    /// Manage the compare selection
    Compare {
        #[command(subcommand)]
        action: compare::CompareAction,
    },

    /// Manage the preferred sort order
    Sort {
        #[command(subcommand)]
        action: sort::SortAction,
    },

    /// Manage search defaults and saved locations
    Preferences {
        #[command(subcommand)]
        action: preferences::PreferencesAction,
    },

    /// Track MarioPoints
    Rewards {
        #[command(subcommand)]
        action: rewards::RewardsAction,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(cli.format, &anyhow::Error::from(e)),
    };

    let telemetry = if cli.verbose {
        TelemetryConfig::with_level("debug").detailed()
    } else {
        TelemetryConfig::with_level(config.schema.logging.level.clone())
    };
    if let Err(e) = mario_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    let ctx = AppContext::new(config.schema, cli.format, cli.store);

    let result = match cli.command {
        Commands::Distance { a, b } => similarity::distance(&ctx, &a, &b),
        Commands::Similarity { a, b } => similarity::similarity(&ctx, &a, &b),
        Commands::Suggest { query, threshold, terms_file } => {
            similarity::suggest(&ctx, &query, threshold, terms_file.as_deref())
        }
        Commands::Related { catalog, query, current, limit } => {
            related::run(&ctx, &catalog, &query, &current, limit)
        }
        Commands::ByCategory { catalog, category, exclude, limit } => {
            related::by_category(&ctx, &catalog, &category, &exclude, limit)
        }
        Commands::Refine { catalog, refinement } => related::refine(&ctx, &catalog, &refinement),
        Commands::Highlight { text, terms } => highlight::run(&ctx, &text, &terms),
        Commands::History { action } => history::run(&ctx, action),
        Commands::Compare { action } => compare::run(&ctx, action),
        Commands::Sort { action } => sort::run(&ctx, action),
        Commands::Preferences { action } => preferences::run(&ctx, action),
        Commands::Rewards { action } => rewards::run(&ctx, action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(ctx.format, &e),
    }
}

/// Print `err` on stderr and pick the exit code
///
/// JSON output gets the structured report of a `mario_core::Error`, or a
/// bare message for anything else.
fn report_error(format: OutputFormat, err: &anyhow::Error) -> ExitCode {
    let core = err.downcast_ref::<mario_core::Error>();

    if format == OutputFormat::Json {
        let report = match core {
            Some(e) => serde_json::to_value(e.to_report()),
            None => Ok(serde_json::json!({ "message": format!("{:#}", err), "exit_code": 1 })),
        };
        match report.and_then(|value| serde_json::to_string_pretty(&value)) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => Status::error(&format!("{:#}", err)),
        }
    } else {
        Status::error(&format!("{:#}", err));
    }

    let code = core.map_or(1, mario_core::Error::exit_code);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
