use mf_core::ValidationErrors;
use mf_gateway::GatewayError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Form '{form}' has no field '{field}' {location}")]
    UnknownField {
        form: &'static str,
        field: String,
        location: ErrorLocation,
    },

    #[error("Field '{field}' expects a {expected} value {location}")]
    FieldKind {
        field: String,
        expected: &'static str,
        location: ErrorLocation,
    },

    #[error("Field '{field}' does not accept '{value}' {location}")]
    InvalidChoice {
        field: String,
        value: String,
        location: ErrorLocation,
    },

    #[error("Cannot {action} while {state} {location}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
        location: ErrorLocation,
    },

    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    #[error("Gateway error: {source} {location}")]
    Gateway {
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn unknown_field(form: &'static str, field: impl Into<String>) -> Self {
        AppError::UnknownField {
            form,
            field: field.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn field_kind(field: impl Into<String>, expected: &'static str) -> Self {
        AppError::FieldKind {
            field: field.into(),
            expected,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_choice(field: impl Into<String>, value: impl Into<String>) -> Self {
        AppError::InvalidChoice {
            field: field.into(),
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_transition(action: &'static str, state: &'static str) -> Self {
        AppError::InvalidTransition {
            action,
            state,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(errors: ValidationErrors) -> Self {
        AppError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<GatewayError> for AppError {
    #[track_caller]
    fn from(source: GatewayError) -> Self {
        AppError::Gateway {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
