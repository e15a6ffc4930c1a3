//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Where flights come from, plus edits applied before the query runs.
///
/// Removals are applied first, then status updates, each in the order given.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// JSON file holding an array of flight records
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Remove a flight before querying (repeatable)
    #[arg(long, value_name = "FLIGHT")]
    pub remove: Vec<String>,

    /// Set a flight's status before querying (repeatable)
    #[arg(long = "set-status", value_name = "FLIGHT=STATUS", value_parser = parse_status_update)]
    pub set_status: Vec<StatusUpdate>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// A `FLIGHT=STATUS` pair from `--set-status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Flight to update.
    pub flight_number: String,
    /// Status to store.
    pub status: String,
}

fn parse_status_update(value: &str) -> Result<StatusUpdate, String> {
    let (flight_number, status) = value
        .split_once('=')
        .ok_or_else(|| format!("expected FLIGHT=STATUS, got '{value}'"))?;

    if flight_number.is_empty() || status.is_empty() {
        return Err(format!("expected FLIGHT=STATUS, got '{value}'"));
    }

    Ok(StatusUpdate {
        flight_number: flight_number.to_string(),
        status: status.to_string(),
    })
}

/// Duration command arguments.
#[derive(Debug, Args)]
pub struct DurationCommand {
    /// Departure time, YYYY-MM-DD HH:MM
    pub departure: String,

    /// Arrival time, YYYY-MM-DD HH:MM
    pub arrival: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Flights to query.
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Status query arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Flights to query.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Status to match exactly (e.g. ON_TIME, DELAYED, CANCELLED)
    pub status: String,
}

/// Longest-flight query arguments.
#[derive(Debug, Args)]
pub struct LongestCommand {
    /// Flights to query.
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// JSON output
    Json,
}
