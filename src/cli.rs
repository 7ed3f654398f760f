//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::filter::FilterCriteria;
use crate::models::{Party, US_STATES};
use clap::Parser;
use std::path::PathBuf;

/// Poltrack - political accountability tracker
///
/// Fetches the politician roster from the tracker API, filters it
/// client-side, and shows voting records with summary statistics.
///
/// Examples:
///   poltrack
///   poltrack --search jane --party Democrat
///   poltrack --state CA --group-by-state
///   poltrack --election-year 2026 --format markdown --output roster.md
///   poltrack --record 42
///   poltrack --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Base URL of the tracker API
    ///
    /// Overrides the config file. Can also be set via POLTRACK_API_URL.
    #[arg(long, value_name = "URL", env = "POLTRACK_API_URL")]
    pub api_url: Option<String>,

    /// Search term matched (case-insensitively) against name or position
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Filter by party: Democrat, Republican, Independent or Nonpartisan
    #[arg(short, long, value_name = "PARTY")]
    pub party: Option<String>,

    /// Filter by position substring (e.g. "Governor", "U.S. Senator")
    #[arg(long, value_name = "POSITION")]
    pub position: Option<String>,

    /// Filter by exact election year
    #[arg(short, long, value_name = "YEAR")]
    pub election_year: Option<i32>,

    /// Filter by two-letter state code (e.g. CA)
    #[arg(long, value_name = "CODE")]
    pub state: Option<String>,

    /// Group the roster by state instead of the flat list
    ///
    /// The "Up for Election in 2026" section is not shown in grouped mode.
    #[arg(short, long)]
    pub group_by_state: bool,

    /// Show the voting record for the politician with this id
    #[arg(short, long, value_name = "ID")]
    pub record: Option<u64>,

    /// Suppress the "Up for Election in 2026" section
    #[arg(long)]
    pub no_upcoming: bool,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .poltrack.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .poltrack.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// Markdown
    Markdown,
    /// JSON
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if let Some(ref api_url) = self.api_url {
            if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
                return Err("API URL must start with 'http://' or 'https://'".to_string());
            }
        }

        if let Some(ref party) = self.party {
            party.parse::<Party>()?;
        }

        if let Some(ref state) = self.state {
            let code = state.to_uppercase();
            if !US_STATES.contains(&code.as_str()) {
                return Err(format!("Unknown state code '{}'", state));
            }
        }

        if self.group_by_state && self.record.is_some() {
            return Err("Cannot use both --group-by-state and --record".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        Ok(())
    }

    /// Build the filter criteria from the filter flags.
    ///
    /// Expects `validate()` to have passed; flags that fail to parse are
    /// treated as unset.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            party: self.party.as_deref().and_then(|p| p.parse().ok()),
            position: self.position.clone(),
            election_year: self.election_year,
            state: self.state.as_deref().map(str::to_uppercase),
        }
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
