//! Text-to-value conversions shared by the submission kinds.

use crate::form::FormState;

use mf_core::ValidationErrors;

use chrono::{NaiveDate, NaiveTime};

pub(crate) fn label(form: &FormState, field: &str) -> &'static str {
    form.schema().field(field).map_or("Field", |spec| spec.label)
}

pub(crate) fn positive_int(
    form: &FormState,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<u32> {
    match form.text(field).trim().parse::<u32>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            errors.push(
                field,
                format!("{} must be a positive whole number", label(form, field)),
            );
            None
        }
    }
}

pub(crate) fn date(
    form: &FormState,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(form.text(field).trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(
                field,
                format!("{} must be a date (YYYY-MM-DD)", label(form, field)),
            );
            None
        }
    }
}

/// Accepts `HH:MM` as produced by time inputs, or `HH:MM:SS`
pub(crate) fn time(
    form: &FormState,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<NaiveTime> {
    let text = form.text(field).trim();
    match NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
    {
        Ok(time) => Some(time),
        Err(_) => {
            errors.push(
                field,
                format!("{} must be a time (HH:MM)", label(form, field)),
            );
            None
        }
    }
}

pub(crate) fn email(form: &FormState, field: &str, errors: &mut ValidationErrors) -> String {
    let text = form.text(field).trim();
    let valid = text
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
    if !valid {
        errors.push(field, "Please enter a valid email address");
    }
    text.to_string()
}

/// `None` for a blank field
pub(crate) fn optional_text(form: &FormState, field: &str) -> Option<String> {
    let text = form.text(field).trim();
    (!text.is_empty()).then(|| text.to_string())
}
