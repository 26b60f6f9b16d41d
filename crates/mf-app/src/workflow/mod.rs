//! Submission workflow: validate a form, send it through the gateway once,
//! and report the outcome.

mod kind;
pub mod kinds;
mod parse;
mod redirect;
mod status;
mod submission;

pub use kind::{SubmissionKind, SubmitLabels};
pub use redirect::Redirect;
pub use status::{SubmissionError, SubmissionStatus};
pub use submission::SubmissionWorkflow;
