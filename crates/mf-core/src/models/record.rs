use crate::{
    MissingPersonReport, NewMissingPersonReport, NewSightingReport, RecordKind, SightingReport,
};

use serde::Serialize;

/// A stored record of any listable kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    MissingPerson(MissingPersonReport),
    Sighting(SightingReport),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::MissingPerson(_) => RecordKind::MissingPerson,
            Self::Sighting(_) => RecordKind::Sighting,
        }
    }
}

/// A record about to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NewRecord {
    MissingPerson(NewMissingPersonReport),
    Sighting(NewSightingReport),
}

impl NewRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::MissingPerson(_) => RecordKind::MissingPerson,
            Self::Sighting(_) => RecordKind::Sighting,
        }
    }
}

impl From<NewMissingPersonReport> for NewRecord {
    fn from(report: NewMissingPersonReport) -> Self {
        Self::MissingPerson(report)
    }
}

impl From<NewSightingReport> for NewRecord {
    fn from(report: NewSightingReport) -> Self {
        Self::Sighting(report)
    }
}
