use crate::{GatewayResult, Session};

use mf_core::{NewRecord, Record, RecordId, RecordKind, SignUpProfile};

use async_trait::async_trait;

/// The hosted authentication + record store, seen from the client.
///
/// Every call is a single best-effort round trip: no retries, no batching,
/// no transactions.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Create one record in the table of its kind
    async fn insert(&self, record: &NewRecord) -> GatewayResult<RecordId>;

    /// Fetch the whole collection of one record kind, in store order
    async fn select_all(&self, kind: RecordKind) -> GatewayResult<Vec<Record>>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> GatewayResult<()>;

    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session>;

    /// Revoke the current session on the service side
    async fn sign_out(&self) -> GatewayResult<()>;

    /// Cheapest possible read, used as a connection test
    async fn ping(&self) -> GatewayResult<()>;
}
