use mf_core::ValidationErrors;

use serde::Serialize;

/// Why the last submit attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "details", rename_all = "snake_case")]
pub enum SubmissionError {
    /// Caught before any network call
    Validation(ValidationErrors),
    /// Gateway call failed; holds the message shown in the banner
    Gateway(String),
}

impl SubmissionError {
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::Gateway(message) => message.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal for the form instance
    Success,
    Error(SubmissionError),
}

impl SubmissionStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error(_) => "error",
        }
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}
