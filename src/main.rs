//! Poltrack - political accountability tracker
//!
//! A CLI client for a political-tracker REST API: fetches the politician
//! roster, filters and groups it client-side, and shows per-politician
//! voting records with derived summary statistics.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad arguments, config failure, unknown politician)

mod analysis;
mod api;
mod app;
mod cli;
mod config;
mod error;
mod filter;
mod models;
mod report;

use anyhow::{Context, Result};
use api::ApiClient;
use app::{reduce, Action, AppState};
use cli::{Args, OutputFormat};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use models::Politician;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Poltrack v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("\nError: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .poltrack.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".poltrack.toml");

    if path.exists() {
        eprintln!(".poltrack.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .poltrack.toml")?;

    println!("Created .poltrack.toml with default settings.");
    println!("Edit it to customize the API endpoint and report options.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete workflow: fetch, filter, render.
async fn run(args: Args) -> Result<()> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let client = ApiClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_seconds),
    )
    .context("Failed to create API client")?;

    // Build the initial state: roster, then filter criteria, then view mode.
    let mut state = AppState::default();

    let roster = fetch_roster(&client, &args).await;
    state = reduce(state, Action::RosterLoaded(roster));
    state = reduce(state, Action::CriteriaChanged(args.criteria()));
    if args.group_by_state {
        state = reduce(state, Action::ToggleGrouping);
    }

    let output = match args.record {
        Some(id) => {
            let politician = find_politician(&state, id)?;

            state = reduce(state, Action::Select(id));
            let generation = state.fetch_generation;
            let votes = fetch_votes(&client, id, &args).await;
            state = reduce(
                state,
                Action::VotesLoaded {
                    politician_id: id,
                    generation,
                    votes,
                },
            );

            match args.format {
                OutputFormat::Text => {
                    report::generate_record_text(&politician, &state.voting_record)
                }
                OutputFormat::Markdown => {
                    report::generate_record_markdown(&politician, &state.voting_record)
                }
                OutputFormat::Json => {
                    report::generate_record_json(&politician, &state.voting_record)?
                }
            }
        }
        None => match args.format {
            OutputFormat::Text => {
                report::generate_roster_text(&state, config.report.show_upcoming)
            }
            OutputFormat::Markdown => {
                report::generate_roster_markdown(&state, config.report.show_upcoming)
            }
            OutputFormat::Json => {
                report::generate_roster_json(&state, config.report.show_upcoming)?
            }
        },
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            println!("Saved to: {}", path.display());
        }
        None => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

/// Fetch the roster; on failure log and fall back to an empty roster.
async fn fetch_roster(client: &ApiClient, args: &Args) -> Vec<Politician> {
    let spinner = fetch_spinner("Fetching politician roster...", args.quiet);

    let roster = match client.fetch_politicians().await {
        Ok(roster) => {
            info!("Fetched {} politicians", roster.len());
            roster
        }
        Err(e) => {
            warn!("Failed to fetch politicians: {}", e);
            Vec::new()
        }
    };

    spinner.finish_and_clear();
    roster
}

/// Fetch one voting record; on failure log and fall back to an empty record.
async fn fetch_votes(client: &ApiClient, id: u64, args: &Args) -> Vec<models::Vote> {
    let spinner = fetch_spinner("Fetching voting record...", args.quiet);

    let votes = match client.fetch_votes(id).await {
        Ok(votes) => {
            info!("Fetched {} votes for politician {}", votes.len(), id);
            votes
        }
        Err(e) => {
            warn!("Failed to fetch votes for politician {}: {}", id, e);
            Vec::new()
        }
    };

    spinner.finish_and_clear();
    votes
}

/// Look up the selected politician in the fetched roster.
fn find_politician(state: &AppState, id: u64) -> Result<Politician> {
    state
        .roster
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .with_context(|| format!("No politician with id {} in the roster", id))
}

/// Spinner shown while a fetch is in flight; hidden in quiet mode.
fn fetch_spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or(ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .poltrack.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
