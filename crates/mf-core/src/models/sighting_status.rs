use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Review status of a sighting. Every client submission starts as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SightingStatus {
    #[default]
    Pending,
    Verified,
    Dismissed,
    /// Any status set by backend moderation that this client does not know.
    /// Shown under the "all" tab only.
    #[serde(other)]
    Other,
}

impl SightingStatus {
    pub const ALL: [SightingStatus; 3] = [Self::Pending, Self::Verified, Self::Dismissed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Dismissed => "dismissed",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending review",
            Self::Verified => "Verified",
            Self::Dismissed => "Dismissed",
            Self::Other => "Other",
        }
    }
}

impl FromStr for SightingStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "dismissed" => Ok(Self::Dismissed),
            _ => Err(CoreError::InvalidSightingStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SightingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
