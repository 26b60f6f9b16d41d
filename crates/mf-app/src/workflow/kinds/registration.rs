use super::{PASSWORD_MISMATCH, REGISTRATION_FALLBACK, TERMS_NOT_ACCEPTED};
use crate::form::{FormSchema, FormState, REGISTRATION_FORM, fields};
use crate::shell::Route;
use crate::workflow::{Redirect, SubmissionKind, SubmitLabels, parse};

use mf_config::Config;
use mf_core::{SignUpProfile, ValidationErrors};
use mf_gateway::{Gateway, GatewayResult};

use std::time::Duration;

use async_trait::async_trait;

/// Account creation request. The password is never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub profile: SignUpProfile,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}

/// Signs up a new account, then sends the user to the login page.
#[derive(Debug, Clone)]
pub struct RegistrationSubmission {
    redirect_delay: Duration,
}

impl RegistrationSubmission {
    pub fn new(redirect_delay: Duration) -> Self {
        Self { redirect_delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.app.registration_redirect())
    }
}

#[async_trait]
impl SubmissionKind for RegistrationSubmission {
    type Payload = RegistrationRequest;

    fn schema(&self) -> &'static FormSchema {
        &REGISTRATION_FORM
    }

    fn prepare(&self, form: &FormState) -> Result<RegistrationRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = parse::email(form, fields::EMAIL, &mut errors);

        let password = form.text(fields::PASSWORD);
        if password != form.text(fields::CONFIRM_PASSWORD) {
            errors.push(fields::CONFIRM_PASSWORD, PASSWORD_MISMATCH);
        }

        if !form.flag(fields::ACCEPT_TERMS) {
            errors.push(fields::ACCEPT_TERMS, TERMS_NOT_ACCEPTED);
        }

        errors.into_result()?;

        Ok(RegistrationRequest {
            email,
            password: password.to_string(),
            profile: SignUpProfile {
                first_name: form.text(fields::FIRST_NAME).trim().to_string(),
                last_name: form.text(fields::LAST_NAME).trim().to_string(),
            },
        })
    }

    async fn send(&self, gateway: &dyn Gateway, payload: RegistrationRequest) -> GatewayResult<()> {
        gateway
            .sign_up(&payload.email, &payload.password, &payload.profile)
            .await
    }

    fn redirect(&self) -> Redirect {
        Redirect::new(Route::Login, self.redirect_delay)
    }

    fn fallback_message(&self) -> &'static str {
        REGISTRATION_FALLBACK
    }

    fn labels(&self) -> SubmitLabels {
        SubmitLabels {
            idle: "Create account",
            busy: "Creating account...",
            success: "Registration Successful!",
        }
    }
}
