use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The kinds of record the application reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    MissingPerson,
    Sighting,
    /// Accounts live in the gateway's auth service, not in a table
    UserAccount,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingPerson => "missing_person",
            Self::Sighting => "sighting",
            Self::UserAccount => "user_account",
        }
    }

    /// Backing table in the gateway's data store
    pub fn table(&self) -> Option<&'static str> {
        match self {
            Self::MissingPerson => Some("missing_persons"),
            Self::Sighting => Some("sightings"),
            Self::UserAccount => None,
        }
    }
}

impl FromStr for RecordKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "missing_person" | "missing_persons" => Ok(Self::MissingPerson),
            "sighting" | "sightings" => Ok(Self::Sighting),
            "user_account" => Ok(Self::UserAccount),
            _ => Err(CoreError::InvalidRecordKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
