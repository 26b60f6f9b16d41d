use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid missing person status: {value} {location}")]
    InvalidMissingPersonStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sighting status: {value} {location}")]
    InvalidSightingStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid confidence level: {value} {location}")]
    InvalidConfidenceLevel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid record kind: {value} {location}")]
    InvalidRecordKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Record kind mismatch: expected {expected}, got {actual} {location}")]
    RecordKindMismatch {
        expected: &'static str,
        actual: &'static str,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at the caller location
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn kind_mismatch(expected: &'static str, actual: &'static str) -> Self {
        CoreError::RecordKindMismatch {
            expected,
            actual,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
