use crate::{
    CoreError, MissingPersonReport, MissingPersonStatus, Record, RecordKind, SightingReport,
    SightingStatus,
};

use std::fmt::Debug;
use std::hash::Hash;

/// Lifecycle status of a listable record.
pub trait RecordStatus: Copy + Eq + Hash + Debug + 'static {
    /// Every status, in tab order
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Badge text shown on listing cards
    fn label(&self) -> &'static str;
}

impl RecordStatus for MissingPersonStatus {
    const ALL: &'static [Self] = &MissingPersonStatus::ALL;

    fn as_str(&self) -> &'static str {
        MissingPersonStatus::as_str(self)
    }

    fn label(&self) -> &'static str {
        MissingPersonStatus::label(self)
    }
}

impl RecordStatus for SightingStatus {
    const ALL: &'static [Self] = &SightingStatus::ALL;

    fn as_str(&self) -> &'static str {
        SightingStatus::as_str(self)
    }

    fn label(&self) -> &'static str {
        SightingStatus::label(self)
    }
}

/// A record kind that can be fetched as a collection and shown in a grid.
pub trait Listable: TryFrom<Record, Error = CoreError> + Clone {
    /// Status dimension used by the listing tabs
    type Status: RecordStatus;

    const KIND: RecordKind;

    /// Name matched by the free-text search
    fn display_name(&self) -> Option<&str>;

    fn status(&self) -> Self::Status;
}

impl Listable for MissingPersonReport {
    type Status = MissingPersonStatus;

    const KIND: RecordKind = RecordKind::MissingPerson;

    fn display_name(&self) -> Option<&str> {
        Some(&self.full_name)
    }

    fn status(&self) -> MissingPersonStatus {
        self.status
    }
}

impl Listable for SightingReport {
    type Status = SightingStatus;

    const KIND: RecordKind = RecordKind::Sighting;

    fn display_name(&self) -> Option<&str> {
        self.person_name.as_deref()
    }

    fn status(&self) -> SightingStatus {
        self.status
    }
}
