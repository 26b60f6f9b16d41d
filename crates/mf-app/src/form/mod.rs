//! Form state containers.
//!
//! A [`FormState`] holds the in-progress values of exactly one record being
//! edited. It never talks to the network and never checks one field against
//! another; that belongs to the submission workflow.

pub mod fields;
mod schema;
mod schemas;
mod state;
mod value;

pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use schemas::{LOGIN_FORM, MISSING_PERSON_FORM, REGISTRATION_FORM, SIGHTING_FORM};
pub use state::FormState;
pub use value::FieldValue;
