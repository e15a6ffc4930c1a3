//! Command-line interface for flightregistry.
//!
//! This module provides the CLI structure for the `flightreg` binary and the
//! shared step every query command starts with: loading a registry.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

pub use commands::{
    ConfigCommand, DurationCommand, ListCommand, LongestCommand, OutputFormat, SourceArgs,
    StatusCommand, StatusUpdate,
};

use crate::error::Result;
use crate::logging::Verbosity;
use crate::registry::{FlightRegistry, RegistryConfig};

/// flightreg - Query flight records
///
/// Loads flight records from a JSON file into an in-memory registry and
/// answers questions about them. Nothing is written back.
#[derive(Debug, Parser)]
#[command(name = "flightreg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the minutes between two timestamps
    Duration(DurationCommand),

    /// List all flights in insertion order
    List(ListCommand),

    /// List flights with a given status
    Status(StatusCommand),

    /// Show the longest flight
    Longest(LongestCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

/// Build a registry from a source file and apply the requested edits.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds an invalid record.
pub fn load_registry(source: &SourceArgs, config: RegistryConfig) -> Result<FlightRegistry> {
    let mut registry = FlightRegistry::with_config(config);
    let admitted = registry.load_json_file(&source.file)?;
    info!(
        path = %source.file.display(),
        admitted,
        "Loaded flights"
    );

    for flight_number in &source.remove {
        registry.remove(flight_number);
    }
    for update in &source.set_status {
        registry.update_status(&update.flight_number, update.status.clone());
    }

    Ok(registry)
}
