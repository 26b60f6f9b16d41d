//! Process-wide authentication state.

use mf_core::UserAccount;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::info;
use serde::{Deserialize, Serialize};

/// An authenticated session issued by the gateway.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) at which the access token expires
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: UserAccount,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// Shared handle to the current session.
///
/// Created once at startup and passed to whatever needs it. Only sign-in
/// ([`AuthContext::establish`]) and sign-out ([`AuthContext::clear`]) write.
#[derive(Clone, Default)]
pub struct AuthContext {
    inner: Arc<RwLock<Option<Session>>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    pub fn establish(&self, session: Session) {
        info!("Signed in as {}", session.user.email);
        *self.write() = Some(session);
    }

    /// Drop the current session, returning it if there was one
    pub fn clear(&self) -> Option<Session> {
        let previous = self.write().take();
        if let Some(ref session) = previous {
            info!("Signed out {}", session.user.email);
        }
        previous
    }

    pub fn current(&self) -> Option<Session> {
        self.read().clone()
    }

    pub fn user(&self) -> Option<UserAccount> {
        self.read().as_ref().map(|s| s.user.clone())
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.access_token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.read().is_some()
    }

    // A writer can only panic between take/assign, so a poisoned value is still whole.
    fn read(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("session", &*self.read())
            .finish()
    }
}
