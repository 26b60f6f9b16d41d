mod shell;

use crate::form::fields;
use crate::workflow::SubmissionWorkflow;
use crate::workflow::kinds::{
    MissingPersonSubmission, RegistrationSubmission, SightingSubmission,
};

use std::time::Duration;

pub(crate) const AVATAR_BASE: &str = "https://avatars.example/?seed=";

pub(crate) fn sighting_workflow() -> SubmissionWorkflow<SightingSubmission> {
    SubmissionWorkflow::new(SightingSubmission::new(
        AVATAR_BASE,
        Duration::from_secs(3),
    ))
}

pub(crate) fn missing_person_workflow() -> SubmissionWorkflow<MissingPersonSubmission> {
    SubmissionWorkflow::new(MissingPersonSubmission::new(
        AVATAR_BASE,
        Duration::from_secs(3),
    ))
}

pub(crate) fn registration_workflow() -> SubmissionWorkflow<RegistrationSubmission> {
    SubmissionWorkflow::new(RegistrationSubmission::new(Duration::from_secs(5)))
}

pub(crate) fn fill_sighting(workflow: &mut SubmissionWorkflow<SightingSubmission>) {
    workflow.update(fields::PERSON_NAME, "").unwrap();
    workflow.update(fields::SIGHTING_DATE, "2024-01-01").unwrap();
    workflow.update(fields::SIGHTING_TIME, "09:00").unwrap();
    workflow.update(fields::LOCATION, "Main St").unwrap();
    workflow.update(fields::DESCRIPTION, "Seen walking").unwrap();
    workflow.update(fields::CONTACT_INFO, "a@b.com").unwrap();
    workflow.update(fields::CONFIDENCE_LEVEL, "medium").unwrap();
}

pub(crate) const MISSING_PERSON_VALUES: [(&str, &str); 8] = [
    (fields::FULL_NAME, "Jane Doe"),
    (fields::AGE, "34"),
    (fields::GENDER, "female"),
    (fields::LAST_SEEN_DATE, "2024-05-02"),
    (fields::LAST_SEEN_TIME, "18:45"),
    (fields::LAST_SEEN_LOCATION, "Riverside Park"),
    (fields::DESCRIPTION, "Green jacket"),
    (fields::CONTACT_INFO, "555-0199"),
];

pub(crate) fn fill_missing_person(workflow: &mut SubmissionWorkflow<MissingPersonSubmission>) {
    for (field, value) in MISSING_PERSON_VALUES {
        workflow.update(field, value).unwrap();
    }
}

pub(crate) fn fill_registration(
    workflow: &mut SubmissionWorkflow<RegistrationSubmission>,
    password: &str,
    confirm: &str,
) {
    workflow.update(fields::FIRST_NAME, "Grace").unwrap();
    workflow.update(fields::LAST_NAME, "Hopper").unwrap();
    workflow.update(fields::EMAIL, "grace@example.com").unwrap();
    workflow.update(fields::PASSWORD, password).unwrap();
    workflow.update(fields::CONFIRM_PASSWORD, confirm).unwrap();
    workflow.update(fields::ACCEPT_TERMS, true).unwrap();
}
