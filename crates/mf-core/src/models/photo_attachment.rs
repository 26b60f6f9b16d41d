use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;

/// A photo picked in a report form.
///
/// Photos are not uploaded; the stored record carries a generated avatar URL
/// instead (see [`placeholder_avatar_url`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub content_type: Option<String>,
}

impl PhotoAttachment {
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).map(String::from);
        Self {
            file_name,
            content_type,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Avatar URL stored in place of an uploaded photo, seeded by a person's name.
///
/// `base_url` ends with the seed parameter (`...?seed=`). The whole seed is
/// percent-encoded, spaces as `%20`.
pub fn placeholder_avatar_url(base_url: &str, seed: &str) -> String {
    let encoded: String = byte_serialize(seed.trim().as_bytes()).collect();
    format!("{base_url}{}", encoded.replace('+', "%20"))
}
