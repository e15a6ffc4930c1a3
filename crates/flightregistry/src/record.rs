//! Core flight record types for flightregistry.
//!
//! A [`FlightRecord`] is what callers hand to the registry: four required
//! fields plus any number of extra fields, kept verbatim. Once admitted, the
//! registry holds it as a [`Flight`], which also carries the derived
//! `duration_minutes`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key of the derived duration field in serialized flights.
pub const DURATION_FIELD: &str = "duration_minutes";

const FLIGHT_NUMBER_FIELD: &str = "flight_number";
const DEPARTURE_FIELD: &str = "departure_time";
const ARRIVAL_FIELD: &str = "arrival_time";
const STATUS_FIELD: &str = "status";

/// Keys that never belong in a record's extra fields.
const RESERVED_FIELDS: [&str; 5] = [
    FLIGHT_NUMBER_FIELD,
    DEPARTURE_FIELD,
    ARRIVAL_FIELD,
    STATUS_FIELD,
    DURATION_FIELD,
];

/// The conventional operational states of a flight.
///
/// Records store their status as a plain string, so values outside this set
/// are accepted. The enum names the recognized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    /// The flight is operating on schedule.
    OnTime,
    /// The flight is running late.
    Delayed,
    /// The flight will not operate.
    Cancelled,
}

impl FlightStatus {
    /// Every recognized status, in declaration order.
    pub const ALL: [Self; 3] = [Self::OnTime, Self::Delayed, Self::Cancelled];

    /// The wire value of this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "ON_TIME",
            Self::Delayed => "DELAYED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Check whether a raw status string is one of the recognized values.
    #[must_use]
    pub fn is_recognized(value: &str) -> bool {
        Self::ALL.iter().any(|status| status.as_str() == value)
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FlightStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for FlightStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(Error::InvalidField {
                field: STATUS_FIELD,
                expected: "one of ON_TIME, DELAYED, CANCELLED",
            })
    }
}

/// A caller-supplied flight record.
///
/// Deserializing goes through [`TryFrom<Map<String, Value>>`], so absent
/// required fields surface as [`Error::MissingField`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct FlightRecord {
    /// Identifier, unique within a registry.
    pub flight_number: String,
    /// Departure time, `YYYY-MM-DD HH:MM`.
    pub departure_time: String,
    /// Arrival time, `YYYY-MM-DD HH:MM`.
    pub arrival_time: String,
    /// Operational status, conventionally a [`FlightStatus`] value.
    pub status: String,
    /// Any additional fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlightRecord {
    /// Create a record with no extra fields.
    #[must_use]
    pub fn new(
        flight_number: impl Into<String>,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
            status: status.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Drop extra keys that would shadow a named field when serialized.
    pub(crate) fn strip_reserved(&mut self) {
        for key in RESERVED_FIELDS {
            self.extra.remove(key);
        }
    }
}

fn take_string(map: &mut Map<String, Value>, field: &'static str) -> Result<String> {
    match map.remove(field) {
        None | Some(Value::Null) => Err(Error::missing_field(field)),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(Error::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

impl TryFrom<Map<String, Value>> for FlightRecord {
    type Error = Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self> {
        let flight_number = take_string(&mut map, FLIGHT_NUMBER_FIELD)?;
        let departure_time = take_string(&mut map, DEPARTURE_FIELD)?;
        let arrival_time = take_string(&mut map, ARRIVAL_FIELD)?;
        let status = take_string(&mut map, STATUS_FIELD)?;

        // Derived by the registry, never trusted from input.
        map.remove(DURATION_FIELD);

        Ok(Self {
            flight_number,
            departure_time,
            arrival_time,
            status,
            extra: map,
        })
    }
}

impl TryFrom<Value> for FlightRecord {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::try_from(map),
            _ => Err(Error::InvalidField {
                field: "record",
                expected: "a JSON object",
            }),
        }
    }
}

/// A flight held by a registry.
///
/// Fields are read-only; only the owning registry can change the status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    #[serde(flatten)]
    record: FlightRecord,
    duration_minutes: i64,
}

impl Flight {
    pub(crate) fn new(record: FlightRecord, duration_minutes: i64) -> Self {
        Self {
            record,
            duration_minutes,
        }
    }

    pub(crate) fn set_status(&mut self, status: String) {
        self.record.status = status;
    }

    /// The flight's identifier.
    #[must_use]
    pub fn flight_number(&self) -> &str {
        &self.record.flight_number
    }

    /// Departure time as supplied.
    #[must_use]
    pub fn departure_time(&self) -> &str {
        &self.record.departure_time
    }

    /// Arrival time as supplied.
    #[must_use]
    pub fn arrival_time(&self) -> &str {
        &self.record.arrival_time
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.record.status
    }

    /// Duration in minutes, computed when the flight was inserted.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// Extra caller-supplied fields.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.record.extra
    }

    /// Look up an extra field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.record.extra.get(key)
    }

    /// The underlying record.
    #[must_use]
    pub fn record(&self) -> &FlightRecord {
        &self.record
    }

    /// Consume the flight, returning its record.
    #[must_use]
    pub fn into_record(self) -> FlightRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flight_status_display() {
        assert_eq!(FlightStatus::OnTime.to_string(), "ON_TIME");
        assert_eq!(FlightStatus::Delayed.to_string(), "DELAYED");
        assert_eq!(FlightStatus::Cancelled.to_string(), "CANCELLED");
    }

    #[test]
    fn test_flight_status_from_str() {
        assert_eq!(
            "DELAYED".parse::<FlightStatus>().unwrap(),
            FlightStatus::Delayed
        );
        let err = "delayed".parse::<FlightStatus>().unwrap_err();
        assert!(err.to_string().contains("ON_TIME"));
    }

    #[test]
    fn test_flight_status_is_recognized() {
        assert!(FlightStatus::is_recognized("ON_TIME"));
        assert!(FlightStatus::is_recognized("CANCELLED"));
        assert!(!FlightStatus::is_recognized("BOARDING"));
        assert!(!FlightStatus::is_recognized("on_time"));
    }

    #[test]
    fn test_flight_status_serde() {
        let json = serde_json::to_string(&FlightStatus::OnTime).unwrap();
        assert_eq!(json, "\"ON_TIME\"");
        let status: FlightStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, FlightStatus::Cancelled);
    }

    #[test]
    fn test_record_from_json_keeps_extra_fields() {
        let value = json!({
            "flight_number": "AZ001",
            "departure_time": "2025-02-19 15:30",
            "arrival_time": "2025-02-20 03:45",
            "status": "ON_TIME",
            "gate": "B12",
            "crew": ["pilot", "copilot"]
        });

        let record = FlightRecord::try_from(value).unwrap();
        assert_eq!(record.flight_number, "AZ001");
        assert_eq!(record.status, "ON_TIME");
        assert_eq!(record.extra.len(), 2);
        assert_eq!(record.extra["gate"], json!("B12"));
        assert_eq!(record.extra["crew"], json!(["pilot", "copilot"]));
    }

    #[test]
    fn test_record_missing_field() {
        let value = json!({
            "flight_number": "AZ001",
            "departure_time": "2025-02-19 15:30",
            "arrival_time": "2025-02-20 03:45"
        });

        let err = FlightRecord::try_from(value).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "status" }));
    }

    #[test]
    fn test_record_null_field_is_missing() {
        let value = json!({
            "flight_number": null,
            "departure_time": "2025-02-19 15:30",
            "arrival_time": "2025-02-20 03:45",
            "status": "ON_TIME"
        });

        let err = FlightRecord::try_from(value).unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_record_non_string_field() {
        let value = json!({
            "flight_number": 1,
            "departure_time": "2025-02-19 15:30",
            "arrival_time": "2025-02-20 03:45",
            "status": "ON_TIME"
        });

        let err = FlightRecord::try_from(value).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField {
                field: "flight_number",
                ..
            }
        ));
    }

    #[test]
    fn test_record_non_object_rejected() {
        assert!(FlightRecord::try_from(json!(["AZ001"])).is_err());
    }

    #[test]
    fn test_record_input_duration_discarded() {
        let value = json!({
            "flight_number": "AZ001",
            "departure_time": "2025-02-19 15:30",
            "arrival_time": "2025-02-20 03:45",
            "status": "ON_TIME",
            "duration_minutes": 1
        });

        let record = FlightRecord::try_from(value).unwrap();
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_record_deserialize_reports_missing_field() {
        let err = serde_json::from_str::<FlightRecord>(r#"{"flight_number": "AZ001"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("departure_time"));
    }

    #[test]
    fn test_record_builder() {
        let record = FlightRecord::new("AZ002", "2025-02-21 11:00", "2025-02-21 16:00", "DELAYED")
            .with_field("gate", "C3")
            .with_field("seats", 180);

        assert_eq!(record.arrival_time, "2025-02-21 16:00");
        assert_eq!(record.extra["seats"], json!(180));
    }

    #[test]
    fn test_strip_reserved() {
        let mut record = FlightRecord::new("AZ002", "2025-02-21 11:00", "2025-02-21 16:00", "DELAYED")
            .with_field("status", "ON_TIME")
            .with_field("duration_minutes", 5)
            .with_field("gate", "C3");

        record.strip_reserved();
        assert_eq!(record.extra.len(), 1);
        assert!(record.extra.contains_key("gate"));
    }

    #[test]
    fn test_flight_serializes_flat() {
        let record = FlightRecord::new("AZ002", "2025-02-21 11:00", "2025-02-21 16:00", "DELAYED")
            .with_field("gate", "C3");
        let flight = Flight::new(record, 300);

        let value = serde_json::to_value(&flight).unwrap();
        assert_eq!(
            value,
            json!({
                "flight_number": "AZ002",
                "departure_time": "2025-02-21 11:00",
                "arrival_time": "2025-02-21 16:00",
                "status": "DELAYED",
                "gate": "C3",
                "duration_minutes": 300
            })
        );
    }

    #[test]
    fn test_flight_accessors() {
        let record = FlightRecord::new("AZ002", "2025-02-21 11:00", "2025-02-21 16:00", "DELAYED")
            .with_field("gate", "C3");
        let mut flight = Flight::new(record.clone(), 300);

        assert_eq!(flight.flight_number(), "AZ002");
        assert_eq!(flight.departure_time(), "2025-02-21 11:00");
        assert_eq!(flight.duration_minutes(), 300);
        assert_eq!(flight.field("gate"), Some(&json!("C3")));
        assert!(flight.field("terminal").is_none());

        flight.set_status("CANCELLED".to_string());
        assert_eq!(flight.status(), "CANCELLED");
        assert_eq!(flight.extra(), &record.extra);
        assert_eq!(flight.into_record().status, "CANCELLED");
    }
}
