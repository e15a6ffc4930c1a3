//! `flightreg` - CLI for flightregistry
//!
//! This binary loads flight records from a JSON file and runs queries
//! against them.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use flightregistry::cli::output::{render_flight, render_flights};
use flightregistry::cli::{load_registry, Cli, Command, ConfigCommand, SourceArgs};
use flightregistry::{compute_duration, init_logging, Config, FlightRegistry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Duration(cmd) => {
            let minutes = compute_duration(&cmd.departure, &cmd.arrival)?;
            println!("{minutes}");
        }
        Command::List(cmd) => {
            let registry = load(&config, &cmd.source)?;
            let flights: Vec<_> = registry.iter().collect();
            print_flights(&config, &cmd.source, &flights)?;
        }
        Command::Status(cmd) => {
            let registry = load(&config, &cmd.source)?;
            let flights = registry.find_by_status(cmd.status.as_str());
            print_flights(&config, &cmd.source, &flights)?;
        }
        Command::Longest(cmd) => {
            let registry = load(&config, &cmd.source)?;
            let format = config.output_format(cmd.source.format);
            println!(
                "{}",
                render_flight(registry.longest_flight(), format, config.output.pretty_json)?
            );
        }
        Command::Config(cmd) => handle_config(&config, cmd)?,
    }

    Ok(())
}

fn load(config: &Config, source: &SourceArgs) -> anyhow::Result<FlightRegistry> {
    load_registry(source, config.registry.clone())
        .with_context(|| format!("loading flights from {}", source.file.display()))
}

fn print_flights(
    config: &Config,
    source: &SourceArgs,
    flights: &[&flightregistry::Flight],
) -> anyhow::Result<()> {
    let format = config.output_format(source.format);
    println!(
        "{}",
        render_flights(flights, format, config.output.pretty_json)?
    );
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Registry]");
                println!(
                    "  Warn on unknown status: {}",
                    config.registry.warn_on_unknown_status
                );
                println!(
                    "  Extra statuses:         {}",
                    config.registry.extra_statuses.join(", ")
                );
                println!();
                println!("[Output]");
                println!("  Format:                 {:?}", config.output.format);
                println!("  Pretty JSON:            {}", config.output.pretty_json);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
