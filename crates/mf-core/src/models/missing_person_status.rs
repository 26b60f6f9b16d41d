use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Case status of a missing person report.
///
/// Only backend-side moderation moves a case out of `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingPersonStatus {
    /// Person is still missing
    #[default]
    Active,
    /// Person has been located
    Found,
    /// Case closed
    Resolved,
    /// Any status set by backend moderation that this client does not know.
    /// Shown under the "all" tab only.
    #[serde(other)]
    Other,
}

impl MissingPersonStatus {
    pub const ALL: [MissingPersonStatus; 3] = [Self::Active, Self::Found, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Found => "found",
            Self::Resolved => "resolved",
            Self::Other => "other",
        }
    }

    /// Badge text shown on listing cards
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Missing",
            Self::Found => "Found",
            Self::Resolved => "Case Resolved",
            Self::Other => "Other",
        }
    }
}

impl FromStr for MissingPersonStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "active" => Ok(Self::Active),
            "found" => Ok(Self::Found),
            "resolved" => Ok(Self::Resolved),
            _ => Err(CoreError::InvalidMissingPersonStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for MissingPersonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
