use super::REPORT_FALLBACK;
use crate::form::{FormSchema, FormState, MISSING_PERSON_FORM, fields};
use crate::shell::Route;
use crate::workflow::{Redirect, SubmissionKind, SubmitLabels, parse};

use mf_config::Config;
use mf_core::{
    MissingPersonStatus, NewMissingPersonReport, NewRecord, ValidationErrors,
    placeholder_avatar_url,
};
use mf_gateway::{Gateway, GatewayResult};

use std::time::Duration;

use async_trait::async_trait;

/// Files a new missing person case, always as `active`.
#[derive(Debug, Clone)]
pub struct MissingPersonSubmission {
    avatar_base_url: String,
    redirect_delay: Duration,
}

impl MissingPersonSubmission {
    pub fn new(avatar_base_url: impl Into<String>, redirect_delay: Duration) -> Self {
        Self {
            avatar_base_url: avatar_base_url.into(),
            redirect_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.gateway.avatar_base_url.clone(),
            config.app.report_redirect(),
        )
    }
}

#[async_trait]
impl SubmissionKind for MissingPersonSubmission {
    type Payload = NewMissingPersonReport;

    fn schema(&self) -> &'static FormSchema {
        &MISSING_PERSON_FORM
    }

    fn prepare(&self, form: &FormState) -> Result<NewMissingPersonReport, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let age = parse::positive_int(form, fields::AGE, &mut errors);
        let last_seen_date = parse::date(form, fields::LAST_SEEN_DATE, &mut errors);
        let last_seen_time = parse::time(form, fields::LAST_SEEN_TIME, &mut errors);

        let (Some(age), Some(last_seen_date), Some(last_seen_time)) =
            (age, last_seen_date, last_seen_time)
        else {
            return Err(errors);
        };

        let full_name = form.text(fields::FULL_NAME).trim().to_string();
        Ok(NewMissingPersonReport {
            photo_url: placeholder_avatar_url(&self.avatar_base_url, &full_name),
            full_name,
            age,
            gender: form.text(fields::GENDER).trim().to_string(),
            last_seen_date,
            last_seen_time,
            last_seen_location: form.text(fields::LAST_SEEN_LOCATION).trim().to_string(),
            description: form.text(fields::DESCRIPTION).trim().to_string(),
            contact_info: form.text(fields::CONTACT_INFO).trim().to_string(),
            status: MissingPersonStatus::Active,
        })
    }

    async fn send(
        &self,
        gateway: &dyn Gateway,
        payload: NewMissingPersonReport,
    ) -> GatewayResult<()> {
        gateway.insert(&NewRecord::from(payload)).await?;
        Ok(())
    }

    fn redirect(&self) -> Redirect {
        Redirect::new(Route::Home, self.redirect_delay)
    }

    fn fallback_message(&self) -> &'static str {
        REPORT_FALLBACK
    }

    fn labels(&self) -> SubmitLabels {
        SubmitLabels {
            idle: "Submit Report",
            busy: "Submitting...",
            success: "Report Submitted Successfully",
        }
    }
}
