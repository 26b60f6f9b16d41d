pub mod error;
pub mod listable;
pub mod models;
pub mod seed;
pub mod validation;

pub use error::{CoreError, Result as CoreResult};
pub use listable::{Listable, RecordStatus};
pub use models::confidence_level::ConfidenceLevel;
pub use models::missing_person_report::{MissingPersonReport, NewMissingPersonReport};
pub use models::missing_person_status::MissingPersonStatus;
pub use models::photo_attachment::{PhotoAttachment, placeholder_avatar_url};
pub use models::record::{NewRecord, Record};
pub use models::record_id::RecordId;
pub use models::record_kind::RecordKind;
pub use models::sighting_report::{NewSightingReport, SightingReport};
pub use models::sighting_status::SightingStatus;
pub use models::user_account::{SignUpProfile, UserAccount, initials};
pub use validation::{FieldError, ValidationErrors};

#[cfg(test)]
mod tests;
