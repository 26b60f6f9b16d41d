//! Request and response bodies of the REST and auth endpoints.

use crate::{GatewayError, Session};

use mf_core::{SignUpProfile, UserAccount};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Serialize)]
pub(super) struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: &'a SignUpProfile,
}

#[derive(Serialize)]
pub(super) struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub(super) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

#[derive(Deserialize)]
pub(super) struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Default, Deserialize)]
pub(super) struct UserMetadata {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl TokenResponse {
    /// `fallback_email` covers auth servers that omit the address from the user object
    pub fn into_session(self, fallback_email: &str) -> Session {
        let user = UserAccount {
            id: self.user.id,
            email: self
                .user
                .email
                .unwrap_or_else(|| fallback_email.to_string()),
            first_name: self.user.user_metadata.first_name.unwrap_or_default(),
            last_name: self.user.user_metadata.last_name.unwrap_or_default(),
        };

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: self.expires_at,
            user,
        }
    }
}

/// Build an [`GatewayError::Api`] from a failed response.
///
/// The data API reports `{message, code}`, the auth API uses `msg`,
/// `error_description` or `error` depending on the endpoint. Bodies that
/// are not JSON fall back to the status line.
pub fn api_error(status: u16, body: &str) -> GatewayError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    let text = |key: &str| -> Option<String> {
        parsed
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let code = parsed.as_ref().and_then(|v| {
        ["code", "error_code"].iter().find_map(|key| match v.get(*key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    });

    let message = text("message")
        .or_else(|| text("msg"))
        .or_else(|| text("error_description"))
        .or_else(|| text("error"));

    let (message, code) = match message {
        Some(message) => (message, code),
        None => (format!("request failed with status {status}"), code),
    };

    GatewayError::api(status, code, message)
}
