use crate::form::{FieldKind, FieldSpec};

use mf_core::PhotoAttachment;

use serde::Serialize;

/// Current value of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Photo(Option<PhotoAttachment>),
}

impl FieldValue {
    /// Blank value of a field, before any user input
    pub fn initial(spec: &FieldSpec) -> Self {
        match spec.kind {
            FieldKind::Text | FieldKind::Choice(_) => Self::Text(spec.default.to_string()),
            FieldKind::Flag => Self::Flag(spec.default == "true"),
            FieldKind::Photo => Self::Photo(None),
        }
    }

    pub fn fits(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Text(_), FieldKind::Text | FieldKind::Choice(_))
                | (Self::Flag(_), FieldKind::Flag)
                | (Self::Photo(_), FieldKind::Photo)
        )
    }

    /// True when a required field holding this value counts as missing
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Flag(checked) => !checked,
            Self::Photo(photo) => photo.is_none(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        Self::Flag(checked)
    }
}

impl From<PhotoAttachment> for FieldValue {
    fn from(photo: PhotoAttachment) -> Self {
        Self::Photo(Some(photo))
    }
}
