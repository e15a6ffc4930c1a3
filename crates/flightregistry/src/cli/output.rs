//! Rendering of query results.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::record::Flight;

const TIMESTAMP_WIDTH: usize = 16;

/// Render a list of flights.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_flights(flights: &[&Flight], format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(flights)),
        OutputFormat::Json => to_json(&flights, pretty),
    }
}

/// Render a single optional flight.
///
/// An absent flight renders as a notice in table form and as `null` in JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_flight(flight: Option<&Flight>, format: OutputFormat, pretty: bool) -> Result<String> {
    match (format, flight) {
        (OutputFormat::Table, Some(flight)) => Ok(render_table(&[flight])),
        (OutputFormat::Table, None) => Ok("No flights registered.".to_string()),
        (OutputFormat::Json, flight) => to_json(&flight, pretty),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn render_table(flights: &[&Flight]) -> String {
    let flight_width = column_width("FLIGHT", flights.iter().map(|f| f.flight_number()));
    let status_width = column_width("STATUS", flights.iter().map(|f| f.status()));

    let row = |flight: &str, departure: &str, arrival: &str, status: &str, minutes: &str| {
        format!(
            "{flight:<flight_width$}  {departure:<TIMESTAMP_WIDTH$}  {arrival:<TIMESTAMP_WIDTH$}  {status:<status_width$}  {minutes:>8}"
        )
        .trim_end()
        .to_string()
    };

    let mut lines = vec![row("FLIGHT", "DEPARTURE", "ARRIVAL", "STATUS", "MINUTES")];
    lines.extend(flights.iter().map(|f| {
        row(
            f.flight_number(),
            f.departure_time(),
            f.arrival_time(),
            f.status(),
            &f.duration_minutes().to_string(),
        )
    }));
    lines.join("\n")
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
