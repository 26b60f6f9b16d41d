use crate::{MissingPersonStatus, seed};

#[test]
fn test_seed_has_six_cases() {
    let persons = seed::missing_persons();

    assert_eq!(persons.len(), 6);
}

#[test]
fn test_seed_status_mix() {
    let persons = seed::missing_persons();
    let count = |status| persons.iter().filter(|p| p.status == status).count();

    assert_eq!(count(MissingPersonStatus::Active), 4);
    assert_eq!(count(MissingPersonStatus::Found), 1);
    assert_eq!(count(MissingPersonStatus::Resolved), 1);
}

#[test]
fn test_seed_ids_are_unique() {
    let persons = seed::missing_persons();
    let mut ids: Vec<_> = persons.iter().map(|p| p.id).collect();
    ids.dedup();

    assert_eq!(ids.len(), persons.len());
}
