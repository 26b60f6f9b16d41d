use crate::{
    Listable, MissingPersonReport, MissingPersonStatus, Record, RecordStatus, SightingReport,
    SightingStatus, seed,
};

#[test]
fn test_status_tab_order() {
    let persons: Vec<&str> = MissingPersonStatus::ALL.iter().map(RecordStatus::as_str).collect();
    let sightings: Vec<&str> = <SightingStatus as RecordStatus>::ALL
        .iter()
        .map(RecordStatus::as_str)
        .collect();

    assert_eq!(persons, vec!["active", "found", "resolved"]);
    assert_eq!(sightings, vec!["pending", "verified", "dismissed"]);
}

#[test]
fn test_status_labels_through_trait() {
    assert_eq!(RecordStatus::label(&MissingPersonStatus::Resolved), "Case Resolved");
    assert_eq!(RecordStatus::label(&SightingStatus::Pending), "Pending review");
}

#[test]
fn test_missing_person_display_name_is_full_name() {
    let person = seed::missing_persons().remove(0);

    assert_eq!(person.display_name(), Some("Sarah Johnson"));
    assert_eq!(MissingPersonReport::KIND.table(), Some("missing_persons"));
}

#[test]
fn test_record_try_into_wrong_kind_fails() {
    let record = Record::MissingPerson(seed::missing_persons().remove(0));

    let result = SightingReport::try_from(record);

    assert!(result.is_err());
}
