use mf_core::RecordKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from a gateway round trip
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Gateway rejected request: {message} (status: {status}, code: {code:?}) {location}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Gateway unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record kind {kind} has no table {location}")]
    UnsupportedKind {
        kind: RecordKind,
        location: ErrorLocation,
    },

    #[error("Unexpected gateway response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl GatewayError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GatewayError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GatewayError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        GatewayError::Api {
            status,
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        GatewayError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unsupported_kind(kind: RecordKind) -> Self {
        GatewayError::UnsupportedKind {
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected(message: impl Into<String>) -> Self {
        GatewayError::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for an error banner, without source locations.
    ///
    /// None when the failure carries nothing a user could act on; callers
    /// substitute their own generic text.
    pub fn user_message(&self) -> Option<String> {
        let message = match self {
            Self::Http { message, .. }
            | Self::Api { message, .. }
            | Self::Unavailable { message, .. } => message.trim(),
            Self::Json { .. } | Self::UnsupportedKind { .. } | Self::UnexpectedResponse { .. } => {
                return None;
            }
        };

        if message.is_empty() {
            None
        } else {
            Some(message.to_string())
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GatewayError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GatewayError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
