use crate::form::fields::*;
use crate::form::{FieldSpec, FormSchema};

const CONFIDENCE_OPTIONS: &[&str] = &["high", "medium", "low"];

pub static MISSING_PERSON_FORM: FormSchema = FormSchema {
    name: "missing_person",
    fields: &[
        FieldSpec::text(FULL_NAME, "Full Name"),
        FieldSpec::text(AGE, "Age"),
        FieldSpec::text(GENDER, "Gender"),
        FieldSpec::text(LAST_SEEN_DATE, "Last Seen Date"),
        FieldSpec::text(LAST_SEEN_TIME, "Last Seen Time"),
        FieldSpec::text(LAST_SEEN_LOCATION, "Last Seen Location"),
        FieldSpec::text(DESCRIPTION, "Description"),
        FieldSpec::text(CONTACT_INFO, "Contact Information"),
        FieldSpec::photo(PHOTO, "Photo"),
    ],
};

pub static SIGHTING_FORM: FormSchema = FormSchema {
    name: "sighting",
    fields: &[
        FieldSpec::text(PERSON_NAME, "Person's Name (if known)").optional(),
        FieldSpec::text(SIGHTING_DATE, "Date of Sighting"),
        FieldSpec::text(SIGHTING_TIME, "Time of Sighting"),
        FieldSpec::text(LOCATION, "Location"),
        FieldSpec::text(DESCRIPTION, "Description"),
        FieldSpec::text(CONTACT_INFO, "Contact Information"),
        FieldSpec::photo(PHOTO, "Photo"),
        FieldSpec::choice(
            CONFIDENCE_LEVEL,
            "How confident are you?",
            CONFIDENCE_OPTIONS,
            "medium",
        ),
    ],
};

pub static REGISTRATION_FORM: FormSchema = FormSchema {
    name: "registration",
    fields: &[
        FieldSpec::text(FIRST_NAME, "First Name"),
        FieldSpec::text(LAST_NAME, "Last Name"),
        FieldSpec::text(EMAIL, "Email"),
        FieldSpec::text(PASSWORD, "Password"),
        FieldSpec::text(CONFIRM_PASSWORD, "Confirm Password"),
        FieldSpec::flag(ACCEPT_TERMS, "I agree to the terms and conditions"),
    ],
};

pub static LOGIN_FORM: FormSchema = FormSchema {
    name: "login",
    fields: &[
        FieldSpec::text(EMAIL, "Email"),
        FieldSpec::text(PASSWORD, "Password"),
    ],
};
