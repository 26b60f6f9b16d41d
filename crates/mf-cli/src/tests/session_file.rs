use crate::session_file;
use crate::tests::session_expiring_at;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use tempfile::TempDir;

#[test]
fn given_no_file_when_load_then_no_session() {
    // Given
    let dir = TempDir::new().unwrap();

    // When
    let loaded = session_file::load(dir.path()).unwrap();

    // Then
    assert_that!(loaded.session.as_ref().map(|s| s.user.email.as_str()), none());
    assert_that!(loaded.corruption_error.as_deref(), none());
}

#[test]
fn given_saved_session_when_load_then_same_session() {
    // Given
    let dir = TempDir::new().unwrap();
    let session = session_expiring_at(None);
    session_file::save(dir.path(), &session).unwrap();

    // When
    let loaded = session_file::load(dir.path()).unwrap();

    // Then
    assert_that!(
        loaded.session.as_ref().map(|s| s.user.email.as_str()),
        some(eq("jane@example.com"))
    );
    assert_eq!(loaded.session, Some(session));
}

#[test]
fn given_save_when_done_then_no_temp_file_left() {
    // Given
    let dir = TempDir::new().unwrap();

    // When
    session_file::save(dir.path(), &session_expiring_at(None)).unwrap();

    // Then
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["session.json".to_string()]);
}

#[test]
fn given_expired_session_when_load_then_discarded_and_file_removed() {
    // Given
    let dir = TempDir::new().unwrap();
    session_file::save(dir.path(), &session_expiring_at(Some(1))).unwrap();

    // When
    let loaded = session_file::load(dir.path()).unwrap();

    // Then
    assert!(loaded.session.is_none());
    assert!(!session_file::session_path(dir.path()).exists());
}

#[test]
fn given_corrupted_file_when_load_then_backed_up_and_reported() {
    // Given
    let dir = TempDir::new().unwrap();
    std::fs::write(session_file::session_path(dir.path()), "{not json").unwrap();

    // When
    let loaded = session_file::load(dir.path()).unwrap();

    // Then
    assert!(loaded.session.is_none());
    assert!(loaded.corruption_error.is_some());
    let backup = loaded.backup.unwrap();
    assert!(backup.exists());
    assert!(
        backup
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("session.json.corrupted.")
    );
    assert!(!session_file::session_path(dir.path()).exists());
}

#[test]
fn given_saved_session_when_clear_then_removed_once() {
    // Given
    let dir = TempDir::new().unwrap();
    session_file::save(dir.path(), &session_expiring_at(None)).unwrap();

    // When
    let first = session_file::clear(dir.path()).unwrap();
    let second = session_file::clear(dir.path()).unwrap();

    // Then
    assert!(first);
    assert!(!second);
}

#[test]
fn given_expiry_when_checked_then_compared_to_now() {
    // Given
    let open_ended = session_expiring_at(None);
    let expiring = session_expiring_at(Some(100));

    // Then
    assert!(!session_file::is_expired(&open_ended, i64::MAX));
    assert!(!session_file::is_expired(&expiring, 99));
    assert!(session_file::is_expired(&expiring, 100));
}
