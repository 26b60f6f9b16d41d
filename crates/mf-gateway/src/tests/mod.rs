
use crate::Session;

use mf_core::UserAccount;

use uuid::Uuid;

pub(crate) fn sample_session() -> Session {
    Session {
        access_token: "access-token-value".to_string(),
        refresh_token: Some("refresh-token-value".to_string()),
        expires_at: Some(1_700_000_000),
        user: UserAccount {
            id: Uuid::from_u128(42),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        },
    }
}
