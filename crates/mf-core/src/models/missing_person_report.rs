//! Missing person case records.

use crate::models::nullable;
use crate::{CoreError, MissingPersonStatus, Record};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Write shape of a missing person report, as sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMissingPersonReport {
    pub full_name: String,
    pub age: u32,
    pub gender: String,
    pub last_seen_date: NaiveDate,
    pub last_seen_time: NaiveTime,
    pub last_seen_location: String,
    pub description: String,
    pub contact_info: String,
    pub photo_url: String,
    pub status: MissingPersonStatus,
}

/// A stored missing person report as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingPersonReport {
    pub id: Uuid,
    pub full_name: String,
    pub age: u32,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub gender: String,
    pub last_seen_date: NaiveDate,
    #[serde(default)]
    pub last_seen_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub last_seen_location: String,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub contact_info: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "nullable::null_as_default")]
    pub status: MissingPersonStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl MissingPersonReport {
    /// Build the stored form of a new report under the given id
    pub fn from_new(id: Uuid, report: NewMissingPersonReport) -> Self {
        Self {
            id,
            full_name: report.full_name,
            age: report.age,
            gender: report.gender,
            last_seen_date: report.last_seen_date,
            last_seen_time: Some(report.last_seen_time),
            last_seen_location: report.last_seen_location,
            description: report.description,
            contact_info: report.contact_info,
            photo_url: Some(report.photo_url),
            status: report.status,
            created_at: Some(Utc::now()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == MissingPersonStatus::Active
    }
}

impl TryFrom<Record> for MissingPersonReport {
    type Error = CoreError;

    #[track_caller]
    fn try_from(record: Record) -> Result<Self, Self::Error> {
        match record {
            Record::MissingPerson(report) => Ok(report),
            other => Err(CoreError::kind_mismatch(
                "missing_person",
                other.kind().as_str(),
            )),
        }
    }
}
