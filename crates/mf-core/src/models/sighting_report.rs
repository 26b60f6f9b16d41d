//! Sighting records.

use crate::models::nullable;
use crate::{ConfidenceLevel, CoreError, Record, SightingStatus};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Write shape of a sighting, as sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSightingReport {
    /// Name of the person seen, when the reporter knows it
    pub person_name: Option<String>,
    pub sighting_date: NaiveDate,
    pub sighting_time: NaiveTime,
    pub location: String,
    pub description: String,
    pub contact_info: String,
    pub photo_url: String,
    pub confidence_level: ConfidenceLevel,
    pub status: SightingStatus,
}

/// A stored sighting as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingReport {
    pub id: Uuid,
    #[serde(default, deserialize_with = "nullable::blank_as_none")]
    pub person_name: Option<String>,
    pub sighting_date: NaiveDate,
    #[serde(default)]
    pub sighting_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub contact_info: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub confidence_level: ConfidenceLevel,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub status: SightingStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl SightingReport {
    pub fn from_new(id: Uuid, report: NewSightingReport) -> Self {
        Self {
            id,
            person_name: report.person_name,
            sighting_date: report.sighting_date,
            sighting_time: Some(report.sighting_time),
            location: report.location,
            description: report.description,
            contact_info: report.contact_info,
            photo_url: Some(report.photo_url),
            confidence_level: report.confidence_level,
            status: report.status,
            created_at: Some(Utc::now()),
        }
    }
}

impl TryFrom<Record> for SightingReport {
    type Error = CoreError;

    #[track_caller]
    fn try_from(record: Record) -> Result<Self, Self::Error> {
        match record {
            Record::Sighting(report) => Ok(report),
            other => Err(CoreError::kind_mismatch("sighting", other.kind().as_str())),
        }
    }
}
