use crate::form::{FieldKind, FieldSpec, FieldValue, FormSchema};
use crate::{AppError, AppResult};

use mf_core::PhotoAttachment;

/// In-progress values of one record, keyed by the fields of its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    schema: &'static FormSchema,
    values: Vec<FieldValue>,
}

impl FormState {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: schema.fields.iter().map(FieldValue::initial).collect(),
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    /// Replace one field's value, leaving every other field untouched
    #[track_caller]
    pub fn update(&mut self, field: &str, value: impl Into<FieldValue>) -> AppResult<()> {
        let index = self
            .schema
            .position(field)
            .ok_or_else(|| AppError::unknown_field(self.schema.name, field))?;
        let spec = &self.schema.fields[index];
        let value = value.into();

        if !value.fits(spec.kind) {
            return Err(AppError::field_kind(field, spec.kind.as_str()));
        }

        #[allow(clippy::collapsible_if)]
        if let (FieldKind::Choice(options), FieldValue::Text(text)) = (spec.kind, &value) {
            if !options.contains(&text.as_str()) {
                return Err(AppError::invalid_choice(field, text.as_str()));
            }
        }

        self.values[index] = value;
        Ok(())
    }

    /// Back to the state the form was created in
    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }

    /// True when no field differs from its initial value
    pub fn is_blank(&self) -> bool {
        *self == Self::new(self.schema)
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.schema.position(field).map(|i| &self.values[i])
    }

    /// Text of a text or choice field; empty for anything else
    pub fn text(&self, field: &str) -> &str {
        match self.value(field) {
            Some(FieldValue::Text(text)) => text.as_str(),
            _ => "",
        }
    }

    pub fn flag(&self, field: &str) -> bool {
        matches!(self.value(field), Some(FieldValue::Flag(true)))
    }

    pub fn photo(&self, field: &str) -> Option<&PhotoAttachment> {
        match self.value(field) {
            Some(FieldValue::Photo(photo)) => photo.as_ref(),
            _ => None,
        }
    }

    /// Required fields with no usable value, in schema order
    pub fn missing_required(&self) -> Vec<&'static FieldSpec> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .filter(|(spec, value)| spec.required && value.is_empty())
            .map(|(spec, _)| spec)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldValue)> {
        self.schema.fields.iter().zip(&self.values)
    }
}
