//! Listing & filter view over one record kind.

mod card;
mod filter;
mod view;

pub use card::{RecordCard, ToCard, format_card_date};
pub use filter::{ListingFilter, StatusTab, filter_records};
pub use view::{FetchTicket, ListingPanel, ListingState, ListingView};
