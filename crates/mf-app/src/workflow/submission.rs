use crate::form::{FieldValue, FormState};
use crate::workflow::{Redirect, SubmissionError, SubmissionKind, SubmissionStatus};
use crate::{AppError, AppResult};

use mf_core::ValidationErrors;
use mf_gateway::{Gateway, GatewayResult};

use log::{debug, error, info};

/// One form instance and its submit state machine.
///
/// ```text
/// Idle ──begin──▶ Submitting ──complete(Ok)──▶ Success
///  ▲                  │
///  └──dismiss── Error ◀┘ complete(Err) / failed validation
/// ```
///
/// `Error` can also go straight back to `Submitting` on the next attempt.
/// Nothing is retried automatically and no idempotency key is attached, so
/// resubmitting after a network failure may store the record twice.
pub struct SubmissionWorkflow<K: SubmissionKind> {
    kind: K,
    form: FormState,
    status: SubmissionStatus,
}

impl<K: SubmissionKind> SubmissionWorkflow<K> {
    pub fn new(kind: K) -> Self {
        let form = FormState::new(kind.schema());
        Self {
            kind,
            form,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    #[track_caller]
    pub fn update(&mut self, field: &str, value: impl Into<FieldValue>) -> AppResult<()> {
        self.form.update(field, value)
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Idle | SubmissionStatus::Error(_)
        )
    }

    pub fn submit_label(&self) -> &'static str {
        let labels = self.kind.labels();
        match self.status {
            SubmissionStatus::Submitting => labels.busy,
            SubmissionStatus::Success => labels.success,
            _ => labels.idle,
        }
    }

    /// Close the error banner
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, SubmissionStatus::Error(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the payload to send, or `None` when validation failed (the
    /// status then holds the field errors). Errors only for a transition the
    /// state machine does not allow.
    #[track_caller]
    pub fn begin(&mut self) -> AppResult<Option<K::Payload>> {
        if !self.can_submit() {
            return Err(AppError::invalid_transition("submit", self.status.name()));
        }

        match self.validate() {
            Ok(payload) => {
                self.status = SubmissionStatus::Submitting;
                Ok(Some(payload))
            }
            Err(errors) => {
                debug!("{} form rejected: {errors}", self.form.schema().name);
                self.status = SubmissionStatus::Error(SubmissionError::Validation(errors));
                Ok(None)
            }
        }
    }

    /// Record the gateway outcome of the in-flight submission.
    ///
    /// On success the form is reset and the redirect to follow is returned.
    #[track_caller]
    pub fn complete(&mut self, result: GatewayResult<()>) -> AppResult<Option<Redirect>> {
        if self.status != SubmissionStatus::Submitting {
            return Err(AppError::invalid_transition("complete", self.status.name()));
        }

        match result {
            Ok(()) => {
                info!("{} submission succeeded", self.form.schema().name);
                self.form.reset();
                self.status = SubmissionStatus::Success;
                Ok(Some(self.kind.redirect()))
            }
            Err(err) => {
                error!("Error submitting {}: {err}", self.form.schema().name);
                let message = err
                    .user_message()
                    .unwrap_or_else(|| self.kind.fallback_message().to_string());
                self.status = SubmissionStatus::Error(SubmissionError::Gateway(message));
                Ok(None)
            }
        }
    }

    /// `begin`, one gateway call, `complete`
    pub async fn submit(&mut self, gateway: &dyn Gateway) -> AppResult<Option<Redirect>> {
        let Some(payload) = self.begin()? else {
            return Ok(None);
        };
        let result = self.kind.send(gateway, payload).await;
        self.complete(result)
    }

    fn validate(&self) -> Result<K::Payload, ValidationErrors> {
        let missing = self.form.missing_required();
        if !missing.is_empty() {
            let mut errors = ValidationErrors::new();
            for spec in missing {
                errors.push(spec.name, format!("{} is required", spec.label));
            }
            return Err(errors);
        }

        self.kind.prepare(&self.form)
    }
}
