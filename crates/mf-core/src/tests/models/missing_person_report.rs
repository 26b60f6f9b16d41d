use crate::{
    CoreError, MissingPersonReport, MissingPersonStatus, NewMissingPersonReport, NewRecord, Record,
    RecordKind, SightingReport,
};

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use uuid::Uuid;

fn new_report() -> NewMissingPersonReport {
    NewMissingPersonReport {
        full_name: "Jane Doe".to_string(),
        age: 24,
        gender: "female".to_string(),
        last_seen_date: NaiveDate::from_ymd_opt(2023, 9, 15).unwrap(),
        last_seen_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        last_seen_location: "Central Park, New York".to_string(),
        description: "Blue jacket and jeans".to_string(),
        contact_info: "555-0100".to_string(),
        photo_url: "https://avatars.test/Jane%20Doe".to_string(),
        status: MissingPersonStatus::Active,
    }
}

#[test]
fn test_new_report_serializes_with_table_column_names() {
    let value = serde_json::to_value(new_report()).unwrap();

    assert_eq!(value["full_name"], "Jane Doe");
    assert_eq!(value["age"], 24);
    assert_eq!(value["last_seen_date"], "2023-09-15");
    assert_eq!(value["last_seen_time"], "18:30:00");
    assert_eq!(value["last_seen_location"], "Central Park, New York");
    assert_eq!(value["contact_info"], "555-0100");
    assert_eq!(value["status"], "active");
}

#[test]
fn test_stored_report_tolerates_missing_optional_columns() {
    let id = Uuid::new_v4();
    let report: MissingPersonReport = serde_json::from_value(json!({
        "id": id,
        "full_name": "Sam Lee",
        "age": 40,
        "last_seen_date": "2024-02-01",
        "status": "found"
    }))
    .unwrap();

    assert_eq!(report.id, id);
    assert_eq!(report.status, MissingPersonStatus::Found);
    assert!(report.last_seen_time.is_none());
    assert!(report.photo_url.is_none());
    assert!(!report.is_open());
}

#[test]
fn test_from_new_keeps_every_field() {
    let id = Uuid::new_v4();
    let report = MissingPersonReport::from_new(id, new_report());

    assert_eq!(report.id, id);
    assert_eq!(report.full_name, "Jane Doe");
    assert_eq!(report.last_seen_time, NaiveTime::from_hms_opt(18, 30, 0));
    assert!(report.is_open());
    assert!(report.created_at.is_some());
}

#[test]
fn test_try_from_record_rejects_other_kind() {
    let sighting = SightingReport {
        id: Uuid::new_v4(),
        person_name: None,
        sighting_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        sighting_time: None,
        location: "Main St".to_string(),
        description: String::new(),
        contact_info: String::new(),
        photo_url: None,
        confidence_level: Default::default(),
        status: Default::default(),
        created_at: None,
    };

    let result = MissingPersonReport::try_from(Record::Sighting(sighting));

    assert!(matches!(result, Err(CoreError::RecordKindMismatch { .. })));
}

#[test]
fn test_new_record_kind() {
    let record = NewRecord::from(new_report());
    assert_eq!(record.kind(), RecordKind::MissingPerson);
}

#[test]
fn test_stored_report_reads_null_text_columns_as_empty() {
    let report: MissingPersonReport = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "full_name": "Emma Rodriguez",
        "age": 16,
        "gender": null,
        "last_seen_date": "2023-09-12",
        "last_seen_location": null,
        "description": null,
        "contact_info": null,
        "status": null
    }))
    .unwrap();

    assert_eq!(report.gender, "");
    assert_eq!(report.last_seen_location, "");
    assert_eq!(report.description, "");
    assert_eq!(report.contact_info, "");
    assert_eq!(report.status, MissingPersonStatus::Active);
}

#[test]
fn test_stored_report_unknown_status_reads_as_other() {
    let report: MissingPersonReport = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "full_name": "Emma Rodriguez",
        "age": 16,
        "last_seen_date": "2023-09-12",
        "status": "under_investigation"
    }))
    .unwrap();

    assert_eq!(report.status, MissingPersonStatus::Other);
    assert!(!report.is_open());
}
