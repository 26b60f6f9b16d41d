mod cli;
mod session_file;

use mf_core::UserAccount;
use mf_gateway::Session;

use uuid::Uuid;

pub(crate) fn session_expiring_at(expires_at: Option<i64>) -> Session {
    Session {
        access_token: "access-token-value".to_string(),
        refresh_token: None,
        expires_at,
        user: UserAccount {
            id: Uuid::from_u128(7),
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        },
    }
}
