//! Conversion of `validator` derive output into field-keyed messages.
//!
//! Payload DTOs derive [`validator::Validate`]; the resulting
//! [`ValidationErrors`] is flattened into a [`FieldErrors`] map so the API
//! layer can render `{"fields": {"name": ["..."]}}`.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Field name to list of human-readable messages. Ordered for stable output.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flatten [`ValidationErrors`] into a [`FieldErrors`] map.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs.iter().map(message_for).collect();
        out.insert(field.to_string(), messages);
    }
    out
}

/// Validate a DTO, converting failures into [`CoreError::InvalidFields`].
pub fn validate<T: validator::Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}

fn message_for(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("Invalid value ({})", error.code),
    }
}

/// `validator` custom hook rejecting text that is empty once trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("This field may not be blank.")))
    } else {
        Ok(())
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::InvalidFields(field_errors(&errors))
    }
}
