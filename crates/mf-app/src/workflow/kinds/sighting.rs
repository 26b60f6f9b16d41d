use super::REPORT_FALLBACK;
use crate::form::{FormSchema, FormState, SIGHTING_FORM, fields};
use crate::shell::Route;
use crate::workflow::{Redirect, SubmissionKind, SubmitLabels, parse};

use mf_config::Config;
use mf_core::{
    ConfidenceLevel, NewRecord, NewSightingReport, SightingStatus, ValidationErrors,
    placeholder_avatar_url,
};
use mf_gateway::{Gateway, GatewayResult};

use std::time::Duration;

use async_trait::async_trait;

/// Reports a sighting, always as `pending` review.
#[derive(Debug, Clone)]
pub struct SightingSubmission {
    avatar_base_url: String,
    redirect_delay: Duration,
}

impl SightingSubmission {
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
impl SubmissionKind for SightingSubmission {
    type Payload = NewSightingReport;

    fn schema(&self) -> &'static FormSchema {
        &SIGHTING_FORM
    }

    fn prepare(&self, form: &FormState) -> Result<NewSightingReport, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let sighting_date = parse::date(form, fields::SIGHTING_DATE, &mut errors);
        let sighting_time = parse::time(form, fields::SIGHTING_TIME, &mut errors);
        let confidence_level = match form.text(fields::CONFIDENCE_LEVEL).parse::<ConfidenceLevel>() {
            Ok(level) => Some(level),
            Err(_) => {
                errors.push(fields::CONFIDENCE_LEVEL, "Choose how confident you are");
                None
            }
        };

        let (Some(sighting_date), Some(sighting_time), Some(confidence_level)) =
            (sighting_date, sighting_time, confidence_level)
        else {
            return Err(errors);
        };

        let person_name = parse::optional_text(form, fields::PERSON_NAME);
        Ok(NewSightingReport {
            photo_url: placeholder_avatar_url(
                &self.avatar_base_url,
                person_name.as_deref().unwrap_or_default(),
            ),
            person_name,
            sighting_date,
            sighting_time,
            location: form.text(fields::LOCATION).trim().to_string(),
            description: form.text(fields::DESCRIPTION).trim().to_string(),
            contact_info: form.text(fields::CONTACT_INFO).trim().to_string(),
            confidence_level,
            status: SightingStatus::Pending,
        })
    }

    async fn send(&self, gateway: &dyn Gateway, payload: NewSightingReport) -> GatewayResult<()> {
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
            idle: "Submit Sighting",
            busy: "Submitting...",
            success: "Sighting Reported Successfully",
        }
    }
}
