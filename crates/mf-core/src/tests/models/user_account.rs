use crate::{UserAccount, initials};

use uuid::Uuid;

fn account(first: &str, last: &str) -> UserAccount {
    UserAccount {
        id: Uuid::new_v4(),
        email: "jo@example.com".to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
    }
}

#[test]
fn test_display_name_joins_profile_names() {
    assert_eq!(account("Jo", "March").display_name(), "Jo March");
}

#[test]
fn test_display_name_falls_back_to_email() {
    assert_eq!(account("", " ").display_name(), "jo@example.com");
}

#[test]
fn test_initials() {
    assert_eq!(account("jo", "march").initials(), "JM");
    assert_eq!(initials("Guest User"), "GU");
    assert_eq!(initials(""), "");
}
