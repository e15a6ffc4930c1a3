//! Error types for flightregistry.
//!
//! This module defines all error types used throughout the flightregistry crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightregistry operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// A timestamp did not match the fixed `YYYY-MM-DD HH:MM` format.
    #[error("invalid timestamp '{value}': expected format {expected}")]
    InvalidTimestampFormat {
        /// The rejected input.
        value: String,
        /// Human-readable form of the expected format.
        expected: &'static str,
    },

    /// A required field was absent from a flight record.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A required field was present but held the wrong kind of value.
    #[error("field '{field}' must be {expected}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// What the field should have held.
        expected: &'static str,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read an input file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path that couldn't be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flightregistry operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid timestamp error for the given input.
    #[must_use]
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestampFormat {
            value: value.into(),
            expected: crate::duration::TIMESTAMP_FORMAT_HINT,
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Check if this error is a timestamp format failure.
    #[must_use]
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, Self::InvalidTimestampFormat { .. })
    }

    /// Check if this error reports an absent required field.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
