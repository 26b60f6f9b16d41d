use crate::listing::{ListingFilter, RecordCard, ToCard, filter_records};
use crate::{AppError, AppResult};

use mf_core::{Listable, Record, RecordKind};
use mf_gateway::{Gateway, GatewayResult};

use log::{debug, error};
use serde::Serialize;

pub const LOAD_FALLBACK: &str = "Failed to load records. Please try again.";
pub const RETRY_LABEL: &str = "Retry";

/// Handle for one outstanding fetch.
///
/// Only the ticket of the most recent fetch can update the view.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

/// What the listing page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum ListingPanel {
    Loading,
    Error {
        title: &'static str,
        message: String,
        retry_label: &'static str,
    },
    Empty {
        message: String,
        clear_label: &'static str,
    },
    Grid {
        total: usize,
        cards: Vec<RecordCard>,
    },
}

/// Fetch-once collection view with client-side filtering.
///
/// Results that arrive after [`ListingView::dismount`], or for a fetch that
/// has since been superseded, are dropped.
#[derive(Debug)]
pub struct ListingView<T> {
    state: ListingState<T>,
    generation: u64,
    fetches: usize,
    mounted: bool,
}

impl<T> Default for ListingView<T> {
    fn default() -> Self {
        Self {
            state: ListingState::Loading,
            generation: 0,
            fetches: 0,
            mounted: true,
        }
    }
}

impl<T: Listable + ToCard> ListingView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListingState<T> {
        &self.state
    }

    pub fn records(&self) -> &[T] {
        match &self.state {
            ListingState::Loaded(records) => records,
            _ => &[],
        }
    }

    /// Number of fetches issued so far
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The view has left the screen; later fetch results are discarded
    pub fn dismount(&mut self) {
        self.mounted = false;
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.fetches += 1;
        self.state = ListingState::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a fetch result. Returns false when the result was discarded.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: GatewayResult<Vec<Record>>) -> bool {
        if !self.mounted {
            debug!("Discarding {} fetch for dismounted view", T::KIND);
            return false;
        }

        if ticket.generation != self.generation {
            debug!("Discarding stale {} fetch", T::KIND);
            return false;
        }

        self.state = match result {
            Ok(records) => match records.into_iter().map(T::try_from).collect::<Result<Vec<T>, _>>() {
                Ok(records) => ListingState::Loaded(records),
                Err(err) => {
                    error!("Error decoding {} records: {err}", T::KIND);
                    ListingState::Failed(LOAD_FALLBACK.to_string())
                }
            },
            Err(err) => {
                error!("Error fetching {}: {err}", T::KIND);
                ListingState::Failed(
                    err.user_message()
                        .unwrap_or_else(|| LOAD_FALLBACK.to_string()),
                )
            }
        };
        true
    }

    /// The on-mount fetch
    pub async fn load(&mut self, gateway: &dyn Gateway) -> bool {
        let ticket = self.begin_fetch();
        let result = gateway.select_all(T::KIND).await;
        self.finish_fetch(ticket, result)
    }

    /// The error panel's retry control: exactly one new fetch
    pub async fn retry(&mut self, gateway: &dyn Gateway) -> AppResult<bool> {
        if !matches!(self.state, ListingState::Failed(_)) {
            return Err(AppError::invalid_transition("retry", self.state_name()));
        }
        Ok(self.load(gateway).await)
    }

    pub fn render(&self, filter: &ListingFilter<T::Status>) -> ListingPanel {
        match &self.state {
            ListingState::Loading => ListingPanel::Loading,
            ListingState::Failed(message) => ListingPanel::Error {
                title: "Error Loading Data",
                message: message.clone(),
                retry_label: RETRY_LABEL,
            },
            ListingState::Loaded(records) => {
                let visible = filter_records(records, filter);
                if visible.is_empty() {
                    ListingPanel::Empty {
                        message: empty_message(T::KIND),
                        clear_label: "Clear Filters",
                    }
                } else {
                    ListingPanel::Grid {
                        total: records.len(),
                        cards: visible.into_iter().map(ToCard::to_card).collect(),
                    }
                }
            }
        }
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            ListingState::Loading => "loading",
            ListingState::Loaded(_) => "loaded",
            ListingState::Failed(_) => "failed",
        }
    }
}

fn empty_message(kind: RecordKind) -> String {
    let noun = match kind {
        RecordKind::MissingPerson => "missing persons",
        RecordKind::Sighting => "sightings",
        RecordKind::UserAccount => "records",
    };
    format!("No {noun} found matching your criteria")
}
