//! Field names, as used by the form inputs.

pub const FULL_NAME: &str = "fullName";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const LAST_SEEN_DATE: &str = "lastSeenDate";
pub const LAST_SEEN_TIME: &str = "lastSeenTime";
pub const LAST_SEEN_LOCATION: &str = "lastSeenLocation";
pub const DESCRIPTION: &str = "description";
pub const CONTACT_INFO: &str = "contactInfo";
pub const PHOTO: &str = "photo";

pub const PERSON_NAME: &str = "personName";
pub const SIGHTING_DATE: &str = "sightingDate";
pub const SIGHTING_TIME: &str = "sightingTime";
pub const LOCATION: &str = "location";
pub const CONFIDENCE_LEVEL: &str = "confidenceLevel";

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const ACCEPT_TERMS: &str = "acceptTerms";
