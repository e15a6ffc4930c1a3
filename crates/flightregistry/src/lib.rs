//! `flightregistry` - An in-memory registry of flight records
//!
//! Flights are kept in insertion order, one per flight number, with their
//! duration derived once on insertion. The registry supports removal,
//! status updates, filtering by status and finding the longest flight.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod record;
pub mod registry;

pub use config::Config;
pub use duration::{compute_duration, parse_timestamp};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{Flight, FlightRecord, FlightStatus};
pub use registry::{FlightRegistry, RegistryConfig};
