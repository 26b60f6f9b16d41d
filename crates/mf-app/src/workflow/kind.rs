use crate::form::{FormSchema, FormState};
use crate::workflow::Redirect;

use mf_core::ValidationErrors;
use mf_gateway::{Gateway, GatewayResult};

use async_trait::async_trait;

/// Button and banner text of one kind of submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: &'static str,
    pub busy: &'static str,
    pub success: &'static str,
}

/// What a particular form sends, and where it goes afterwards.
///
/// The workflow checks required fields itself before calling
/// [`SubmissionKind::prepare`], so `prepare` only sees forms with every
/// required field filled.
#[async_trait]
pub trait SubmissionKind: Send + Sync {
    type Payload: Send;

    fn schema(&self) -> &'static FormSchema;

    /// Cross-field rules and conversion into the gateway payload
    fn prepare(&self, form: &FormState) -> Result<Self::Payload, ValidationErrors>;

    /// The single gateway round trip
    async fn send(&self, gateway: &dyn Gateway, payload: Self::Payload) -> GatewayResult<()>;

    fn redirect(&self) -> Redirect;

    /// Banner text when the gateway gives no message of its own
    fn fallback_message(&self) -> &'static str;

    fn labels(&self) -> SubmitLabels;
}
