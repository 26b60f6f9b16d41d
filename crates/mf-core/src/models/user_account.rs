use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile data attached to an account at sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpProfile {
    pub first_name: String,
    pub last_name: String,
}

/// A registered user as known to the gateway's auth service.
///
/// The password is write-only and never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserAccount {
    /// "First Last", falling back to the email when no profile name is set
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    /// Avatar fallback text: first letter of each word of the display name
    pub fn initials(&self) -> String {
        initials(&self.display_name())
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
