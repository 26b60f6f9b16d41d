mod confidence_level;
mod missing_person_report;
mod missing_person_status;
mod photo_attachment;
mod record_kind;
mod sighting_report;
mod user_account;
