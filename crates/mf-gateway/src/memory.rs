//! In-process gateway for tests and offline previews.

use crate::{Gateway, GatewayError, GatewayResult, Session};

use mf_core::{
    MissingPersonReport, NewRecord, Record, RecordId, RecordKind, SightingReport, SignUpProfile,
    UserAccount, seed,
};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

/// Gateway operations, for call counting and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    SelectAll,
    SignUp,
    SignIn,
    SignOut,
    Ping,
}

#[derive(Debug, Clone)]
enum Failure {
    Once(String),
    Always(String),
}

struct Account {
    user: UserAccount,
    password: String,
}

#[derive(Default)]
struct MemoryState {
    missing_persons: Vec<MissingPersonReport>,
    sightings: Vec<SightingReport>,
    accounts: Vec<Account>,
    inserted: Vec<NewRecord>,
    calls: HashMap<Operation, usize>,
    failures: HashMap<Operation, Failure>,
}

/// Gateway that keeps everything in memory.
///
/// Behaves like the hosted service for the happy paths, rejects duplicate
/// sign-ups and bad credentials, and can be told to fail any operation.
#[derive(Default)]
pub struct MemoryGateway {
    state: Mutex<MemoryState>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the bundled sample missing person records
    pub fn with_seed() -> Self {
        Self::new().with_missing_persons(seed::missing_persons())
    }

    pub fn with_missing_persons(self, records: Vec<MissingPersonReport>) -> Self {
        self.lock().missing_persons = records;
        self
    }

    pub fn with_sightings(self, records: Vec<SightingReport>) -> Self {
        self.lock().sightings = records;
        self
    }

    /// Make the next call to `op` fail with `message`
    pub fn fail_next(&self, op: Operation, message: impl Into<String>) {
        self.lock().failures.insert(op, Failure::Once(message.into()));
    }

    /// Make every call to `op` fail with `message` until [`MemoryGateway::recover`]
    pub fn fail_always(&self, op: Operation, message: impl Into<String>) {
        self.lock()
            .failures
            .insert(op, Failure::Always(message.into()));
    }

    pub fn recover(&self, op: Operation) {
        self.lock().failures.remove(&op);
    }

    pub fn calls(&self, op: Operation) -> usize {
        self.lock().calls.get(&op).copied().unwrap_or(0)
    }

    /// Every payload passed to `insert`, in call order
    pub fn inserted(&self) -> Vec<NewRecord> {
        self.lock().inserted.clone()
    }

    pub fn accounts(&self) -> Vec<UserAccount> {
        self.lock().accounts.iter().map(|a| a.user.clone()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Count the call, then apply any pending failure
    fn enter(&self, op: Operation) -> GatewayResult<MutexGuard<'_, MemoryState>> {
        let mut state = self.lock();
        *state.calls.entry(op).or_insert(0) += 1;

        let failure = state.failures.get(&op).cloned();
        if let Some(Failure::Once(_)) = failure {
            state.failures.remove(&op);
        }

        match failure {
            Some(Failure::Once(message)) | Some(Failure::Always(message)) => {
                debug!("Injected failure for {op:?}: {message}");
                Err(GatewayError::unavailable(message))
            }
            None => Ok(state),
        }
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn insert(&self, record: &NewRecord) -> GatewayResult<RecordId> {
        let mut state = self.enter(Operation::Insert)?;
        let id = Uuid::new_v4();

        state.inserted.push(record.clone());
        match record.clone() {
            NewRecord::MissingPerson(report) => state
                .missing_persons
                .push(MissingPersonReport::from_new(id, report)),
            NewRecord::Sighting(report) => {
                state.sightings.push(SightingReport::from_new(id, report))
            }
        }

        Ok(RecordId(id))
    }

    async fn select_all(&self, kind: RecordKind) -> GatewayResult<Vec<Record>> {
        let state = self.enter(Operation::SelectAll)?;
        match kind {
            RecordKind::MissingPerson => Ok(state
                .missing_persons
                .iter()
                .cloned()
                .map(Record::MissingPerson)
                .collect()),
            RecordKind::Sighting => Ok(state
                .sightings
                .iter()
                .cloned()
                .map(Record::Sighting)
                .collect()),
            RecordKind::UserAccount => Err(GatewayError::unsupported_kind(kind)),
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> GatewayResult<()> {
        let mut state = self.enter(Operation::SignUp)?;

        if state
            .accounts
            .iter()
            .any(|a| a.user.email.eq_ignore_ascii_case(email))
        {
            return Err(GatewayError::api(
                422,
                Some("user_already_exists".to_string()),
                "User already registered",
            ));
        }

        state.accounts.push(Account {
            user: UserAccount {
                id: Uuid::new_v4(),
                email: email.to_string(),
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
            },
            password: password.to_string(),
        });

        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session> {
        let state = self.enter(Operation::SignIn)?;

        let account = state
            .accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email) && a.password == password)
            .ok_or_else(|| {
                GatewayError::api(
                    400,
                    Some("invalid_credentials".to_string()),
                    "Invalid login credentials",
                )
            })?;

        Ok(Session {
            access_token: format!("memory-{}", Uuid::new_v4()),
            refresh_token: None,
            expires_at: None,
            user: account.user.clone(),
        })
    }

    async fn sign_out(&self) -> GatewayResult<()> {
        self.enter(Operation::SignOut)?;
        Ok(())
    }

    async fn ping(&self) -> GatewayResult<()> {
        self.enter(Operation::Ping)?;
        Ok(())
    }
}
