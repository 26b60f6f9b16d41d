use crate::{ConfidenceLevel, SightingStatus};

use std::str::FromStr;

#[test]
fn test_confidence_level_round_trips_through_str() {
    for level in [ConfidenceLevel::Low, ConfidenceLevel::Medium, ConfidenceLevel::High] {
        assert_eq!(ConfidenceLevel::from_str(level.as_str()).unwrap(), level);
    }
}

#[test]
fn test_confidence_level_rejects_unknown_value() {
    assert!(ConfidenceLevel::from_str("certain").is_err());
    assert!(ConfidenceLevel::from_str("Medium").is_err());
}

#[test]
fn test_confidence_level_default_is_medium() {
    assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::Medium);
}

#[test]
fn test_sighting_status_default_is_pending() {
    assert_eq!(SightingStatus::default(), SightingStatus::Pending);
    assert_eq!(SightingStatus::from_str("pending").unwrap(), SightingStatus::Pending);
    assert!(SightingStatus::from_str("active").is_err());
}
