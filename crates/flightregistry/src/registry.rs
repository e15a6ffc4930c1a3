//! In-memory flight registry.
//!
//! The registry keeps flights in insertion order and allows at most one
//! flight per flight number. The first insert for a flight number wins; later
//! inserts with the same number are ignored, whatever they carry.

use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::duration::compute_duration;
use crate::error::{Error, Result};
use crate::record::{Flight, FlightRecord, FlightStatus};

/// Behavior knobs for a [`FlightRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Emit a warning when a flight is stored with an unrecognized status.
    /// The status is stored either way.
    pub warn_on_unknown_status: bool,

    /// Status values accepted without warning, on top of [`FlightStatus::ALL`].
    pub extra_statuses: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            warn_on_unknown_status: true,
            extra_statuses: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Check whether a status is one this configuration knows about.
    #[must_use]
    pub fn is_recognized(&self, status: &str) -> bool {
        FlightStatus::is_recognized(status) || self.extra_statuses.iter().any(|s| s == status)
    }
}

/// An ordered collection of flights keyed by flight number.
///
/// # Examples
///
/// ```
/// use flightregistry::{FlightRecord, FlightRegistry};
///
/// let mut registry = FlightRegistry::new();
/// registry
///     .insert(FlightRecord::new("AZ001", "2025-02-19 15:30", "2025-02-20 03:45", "ON_TIME"))
///     .unwrap();
///
/// let longest = registry.longest_flight().unwrap();
/// assert_eq!(longest.duration_minutes(), 735);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlightRegistry {
    config: RegistryConfig,
    flights: Vec<Flight>,
}

impl FlightRegistry {
    /// Create an empty registry with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with custom configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            flights: Vec::new(),
        }
    }

    /// The registry's configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Insert a flight.
    ///
    /// Returns `true` if the flight was admitted, or `false` if a flight with
    /// the same number is already present. A rejected record is discarded
    /// without being inspected further, so its timestamps are never parsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestampFormat`] if either timestamp of a new
    /// flight is malformed. The registry is left unchanged.
    pub fn insert(&mut self, mut record: FlightRecord) -> Result<bool> {
        if self.contains(&record.flight_number) {
            debug!(
                flight_number = %record.flight_number,
                "Skipping duplicate flight"
            );
            return Ok(false);
        }

        let duration_minutes = compute_duration(&record.departure_time, &record.arrival_time)?;
        self.check_status(&record.flight_number, &record.status);
        record.strip_reserved();

        debug!(
            flight_number = %record.flight_number,
            duration_minutes,
            "Inserted flight"
        );
        self.flights.push(Flight::new(record, duration_minutes));
        Ok(true)
    }

    /// Remove the flight with the given number.
    ///
    /// Returns `true` if a flight was removed. Unknown numbers are a no-op.
    pub fn remove(&mut self, flight_number: &str) -> bool {
        match self.position(flight_number) {
            Some(index) => {
                self.flights.remove(index);
                debug!(flight_number, "Removed flight");
                true
            }
            None => {
                trace!(flight_number, "No flight to remove");
                false
            }
        }
    }

    /// Overwrite the status of the flight with the given number.
    ///
    /// The new status is stored as given. Returns `true` if a flight was
    /// updated. Unknown numbers are a no-op.
    pub fn update_status(&mut self, flight_number: &str, status: impl Into<String>) -> bool {
        let Some(index) = self.position(flight_number) else {
            trace!(flight_number, "No flight to update");
            return false;
        };

        let status = status.into();
        self.check_status(flight_number, &status);
        debug!(flight_number, status = %status, "Updated flight status");
        self.flights[index].set_status(status);
        true
    }

    /// All flights whose status equals `status` exactly, in insertion order.
    #[must_use]
    pub fn find_by_status<S>(&self, status: &S) -> Vec<&Flight>
    where
        S: AsRef<str> + ?Sized,
    {
        let status = status.as_ref();
        self.flights
            .iter()
            .filter(|flight| flight.status() == status)
            .collect()
    }

    /// The flight with the greatest duration.
    ///
    /// Ties go to the earliest inserted flight. Returns `None` when empty.
    #[must_use]
    pub fn longest_flight(&self) -> Option<&Flight> {
        self.flights.iter().fold(None, |longest, flight| match longest {
            Some(current) if current.duration_minutes() >= flight.duration_minutes() => {
                Some(current)
            }
            _ => Some(flight),
        })
    }

    /// Look up a flight by number.
    #[must_use]
    pub fn get(&self, flight_number: &str) -> Option<&Flight> {
        self.flights
            .iter()
            .find(|flight| flight.flight_number() == flight_number)
    }

    /// Check whether a flight with the given number is present.
    #[must_use]
    pub fn contains(&self, flight_number: &str) -> bool {
        self.position(flight_number).is_some()
    }

    /// Number of flights held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check if the registry holds no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Iterate over flights in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.flights.iter()
    }

    /// Insert every record from a JSON array, in order.
    ///
    /// Returns how many records were admitted. Loading stops at the first
    /// bad record; records before it stay inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON array, if an element is
    /// missing a required field, or if a timestamp is malformed.
    pub fn load_json<R: Read>(&mut self, reader: R) -> Result<usize> {
        let values: Vec<Value> = serde_json::from_reader(reader)?;
        self.insert_values(values)
    }

    /// Insert every record from a JSON array held in a string.
    ///
    /// # Errors
    ///
    /// See [`FlightRegistry::load_json`].
    pub fn load_json_str(&mut self, json: &str) -> Result<usize> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        self.insert_values(values)
    }

    /// Insert every record from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be opened, otherwise
    /// see [`FlightRegistry::load_json`].
    pub fn load_json_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let admitted = self.load_json(BufReader::new(file))?;
        debug!(path = %path.display(), admitted, "Loaded flights from file");
        Ok(admitted)
    }

    fn insert_values(&mut self, values: Vec<Value>) -> Result<usize> {
        let mut admitted = 0;
        for value in values {
            if self.insert(FlightRecord::try_from(value)?)? {
                admitted += 1;
            }
        }
        Ok(admitted)
    }

    fn position(&self, flight_number: &str) -> Option<usize> {
        self.flights
            .iter()
            .position(|flight| flight.flight_number() == flight_number)
    }

    fn check_status(&self, flight_number: &str, status: &str) {
        if self.config.warn_on_unknown_status && !self.config.is_recognized(status) {
            warn!(flight_number, status, "Unrecognized flight status");
        }
    }
}

impl<'a> IntoIterator for &'a FlightRegistry {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}

impl Serialize for FlightRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.flights)
    }
}
