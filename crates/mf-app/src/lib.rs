//! Client core of Missing Finder: form state, the submit workflow, listing
//! views and the navigation shell. Rendering is left to the caller.

mod error;
pub mod form;
pub mod listing;
pub mod preview;
pub mod shell;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use error::{AppError, Result as AppResult};
