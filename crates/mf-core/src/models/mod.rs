pub mod confidence_level;
pub mod missing_person_report;
pub mod missing_person_status;
pub(crate) mod nullable;
pub mod photo_attachment;
pub mod record;
pub mod record_id;
pub mod record_kind;
pub mod sighting_report;
pub mod sighting_status;
pub mod user_account;
