//! The four forms that submit through the gateway.

mod login;
mod missing_person;
mod registration;
mod sighting;

pub use login::{Credentials, LoginSubmission};
pub use missing_person::MissingPersonSubmission;
pub use registration::{RegistrationRequest, RegistrationSubmission};
pub use sighting::SightingSubmission;

/// Banner text for report failures without a gateway message
pub const REPORT_FALLBACK: &str = "Failed to submit report. Please try again.";
pub const REGISTRATION_FALLBACK: &str = "Failed to register. Please try again.";
pub const LOGIN_FALLBACK: &str = "Failed to sign in. Please try again.";

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const TERMS_NOT_ACCEPTED: &str = "You must accept the terms and conditions";
