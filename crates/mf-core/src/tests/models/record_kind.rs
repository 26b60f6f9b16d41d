use crate::RecordKind;

use std::str::FromStr;

#[test]
fn test_record_kind_tables() {
    assert_eq!(RecordKind::MissingPerson.table(), Some("missing_persons"));
    assert_eq!(RecordKind::Sighting.table(), Some("sightings"));
    assert_eq!(RecordKind::UserAccount.table(), None);
}

#[test]
fn test_record_kind_accepts_table_names() {
    assert_eq!(
        RecordKind::from_str("missing_persons").unwrap(),
        RecordKind::MissingPerson
    );
    assert_eq!(RecordKind::from_str("sightings").unwrap(), RecordKind::Sighting);
    assert!(RecordKind::from_str("users").is_err());
}
