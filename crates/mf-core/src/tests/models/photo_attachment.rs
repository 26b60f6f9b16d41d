use crate::{PhotoAttachment, placeholder_avatar_url};

#[test]
fn test_photo_attachment_guesses_image_type() {
    let photo = PhotoAttachment::new("portrait.JPG");

    assert_eq!(photo.content_type.as_deref(), Some("image/jpeg"));
    assert!(photo.is_image());
}

#[test]
fn test_photo_attachment_unknown_extension() {
    let photo = PhotoAttachment::new("notes.txt");

    assert!(photo.content_type.is_none());
    assert!(!photo.is_image());
}

#[test]
fn test_placeholder_avatar_url_is_seeded_by_name() {
    let url = placeholder_avatar_url("https://avatars.test/svg?seed=", "Jane Doe");

    assert_eq!(url, "https://avatars.test/svg?seed=Jane%20Doe");
}

#[test]
fn test_placeholder_avatar_url_with_empty_seed() {
    let url = placeholder_avatar_url("https://avatars.test/svg?seed=", "");

    assert_eq!(url, "https://avatars.test/svg?seed=");
}

#[test]
fn test_placeholder_avatar_url_encodes_query_delimiters() {
    let url = placeholder_avatar_url("https://avatars.test/svg?seed=", "Tom & Jerry #2?+");

    assert_eq!(
        url,
        "https://avatars.test/svg?seed=Tom%20%26%20Jerry%20%232%3F%2B"
    );
}
