use super::LOGIN_FALLBACK;
use crate::form::{FormSchema, FormState, LOGIN_FORM, fields};
use crate::shell::Route;
use crate::workflow::{Redirect, SubmissionKind, SubmitLabels, parse};

use mf_config::Config;
use mf_core::ValidationErrors;
use mf_gateway::{AuthContext, Gateway, GatewayResult};

use std::time::Duration;

use async_trait::async_trait;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Password sign-in. A successful sign-in establishes the shared session.
#[derive(Debug, Clone)]
pub struct LoginSubmission {
    auth: AuthContext,
    redirect_delay: Duration,
}

impl LoginSubmission {
    pub fn new(auth: AuthContext, redirect_delay: Duration) -> Self {
        Self {
            auth,
            redirect_delay,
        }
    }

    pub fn from_config(config: &Config, auth: AuthContext) -> Self {
        Self::new(auth, config.app.login_redirect())
    }
}

#[async_trait]
impl SubmissionKind for LoginSubmission {
    type Payload = Credentials;

    fn schema(&self) -> &'static FormSchema {
        &LOGIN_FORM
    }

    fn prepare(&self, form: &FormState) -> Result<Credentials, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = parse::email(form, fields::EMAIL, &mut errors);
        errors.into_result()?;

        Ok(Credentials {
            email,
            password: form.text(fields::PASSWORD).to_string(),
        })
    }

    async fn send(&self, gateway: &dyn Gateway, payload: Credentials) -> GatewayResult<()> {
        let session = gateway.sign_in(&payload.email, &payload.password).await?;
        self.auth.establish(session);
        Ok(())
    }

    fn redirect(&self) -> Redirect {
        Redirect::new(Route::Home, self.redirect_delay)
    }

    fn fallback_message(&self) -> &'static str {
        LOGIN_FALLBACK
    }

    fn labels(&self) -> SubmitLabels {
        SubmitLabels {
            idle: "Sign in",
            busy: "Signing in...",
            success: "Signed in",
        }
    }
}
