use crate::{CoreError, MissingPersonStatus};

use std::str::FromStr;

#[test]
fn test_missing_person_status_as_str() {
    assert_eq!(MissingPersonStatus::Active.as_str(), "active");
    assert_eq!(MissingPersonStatus::Found.as_str(), "found");
    assert_eq!(MissingPersonStatus::Resolved.as_str(), "resolved");
}

#[test]
fn test_missing_person_status_from_str() {
    for status in MissingPersonStatus::ALL {
        assert_eq!(MissingPersonStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(matches!(
        MissingPersonStatus::from_str("missing"),
        Err(CoreError::InvalidMissingPersonStatus { .. })
    ));
}

#[test]
fn test_missing_person_status_default_is_active() {
    assert_eq!(MissingPersonStatus::default(), MissingPersonStatus::Active);
}

#[test]
fn test_missing_person_status_labels() {
    assert_eq!(MissingPersonStatus::Active.label(), "Missing");
    assert_eq!(MissingPersonStatus::Found.label(), "Found");
    assert_eq!(MissingPersonStatus::Resolved.label(), "Case Resolved");
}
