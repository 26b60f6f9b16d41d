use crate::{ConfidenceLevel, NewSightingReport, Record, SightingReport, SightingStatus};

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_new_sighting_serializes_unknown_name_as_null() {
    let sighting = NewSightingReport {
        person_name: None,
        sighting_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        sighting_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        location: "Main St".to_string(),
        description: "Seen walking".to_string(),
        contact_info: "a@b.com".to_string(),
        photo_url: "https://avatars.test/".to_string(),
        confidence_level: ConfidenceLevel::Medium,
        status: SightingStatus::Pending,
    };

    let value = serde_json::to_value(sighting).unwrap();

    assert!(value["person_name"].is_null());
    assert_eq!(value["sighting_date"], "2024-01-01");
    assert_eq!(value["confidence_level"], "medium");
    assert_eq!(value["status"], "pending");
}

#[test]
fn test_stored_sighting_defaults() {
    let id = Uuid::new_v4();
    let sighting: SightingReport = serde_json::from_value(json!({
        "id": id,
        "sighting_date": "2024-03-03",
        "location": "Harbor"
    }))
    .unwrap();

    assert_eq!(sighting.confidence_level, ConfidenceLevel::Medium);
    assert_eq!(sighting.status, SightingStatus::Pending);
    assert!(sighting.person_name.is_none());

    let round = SightingReport::try_from(Record::Sighting(sighting.clone())).unwrap();
    assert_eq!(round, sighting);
}

#[test]
fn test_stored_sighting_blank_name_reads_as_unknown() {
    let sighting: SightingReport = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "person_name": "   ",
        "sighting_date": "2024-01-01"
    }))
    .unwrap();

    assert!(sighting.person_name.is_none());
}

#[test]
fn test_stored_sighting_unknown_status_reads_as_other() {
    let sighting: SightingReport = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "sighting_date": "2024-01-01",
        "status": "reviewed",
        "confidence_level": null,
        "description": null
    }))
    .unwrap();

    assert_eq!(sighting.status, SightingStatus::Other);
    assert_eq!(sighting.status.label(), "Other");
    assert_eq!(sighting.confidence_level, ConfidenceLevel::Medium);
    assert_eq!(sighting.description, "");
    assert!(!SightingStatus::ALL.contains(&SightingStatus::Other));
}
