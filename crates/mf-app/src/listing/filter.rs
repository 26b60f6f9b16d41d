use crate::{AppError, AppResult};

use mf_core::{Listable, RecordStatus};

/// Status dimension of the listing tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTab<S> {
    All,
    Only(S),
}

impl<S: RecordStatus> StatusTab<S> {
    /// "All" followed by every status
    pub fn tabs() -> Vec<StatusTab<S>> {
        std::iter::once(Self::All)
            .chain(S::ALL.iter().copied().map(Self::Only))
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    #[track_caller]
    pub fn parse(value: &str) -> AppResult<Self> {
        Self::tabs()
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| AppError::invalid_choice("status", value))
    }

    pub fn matches(&self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

/// Current search box text and status tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilter<S> {
    pub query: String,
    pub tab: StatusTab<S>,
}

impl<S> Default for ListingFilter<S> {
    fn default() -> Self {
        Self {
            query: String::new(),
            tab: StatusTab::All,
        }
    }
}

impl<S> ListingFilter<S> {
    pub fn new(query: impl Into<String>, tab: StatusTab<S>) -> Self {
        Self {
            query: query.into(),
            tab,
        }
    }

    /// The "Clear Filters" action
    pub fn clear(&mut self) {
        self.query.clear();
        self.tab = StatusTab::All;
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !matches!(self.tab, StatusTab::All)
    }
}

/// The records passing `filter`, in their original order.
///
/// An empty query matches every name; otherwise the query must occur in the
/// record's name ignoring case. Records without a name never match a
/// non-empty query.
pub fn filter_records<'a, T: Listable>(
    records: &'a [T],
    filter: &ListingFilter<T::Status>,
) -> Vec<&'a T> {
    let query = filter.query.to_lowercase();

    records
        .iter()
        .filter(|record| filter.tab.matches(record.status()))
        .filter(|record| {
            query.is_empty()
                || record
                    .display_name()
                    .is_some_and(|name| name.to_lowercase().contains(&query))
        })
        .collect()
}
