//! Field-level validation of inbound event DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ::validator::{Validate, ValidationError};

use eventhub_entity::event::EventDto;

/// Object name reported with every event field error.
const OBJECT_NAME: &str = "eventDto";

/// Error code for a date earlier than the validation time.
pub const DATE_IN_PAST_CODE: &str = "wrong.value";

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,
    /// Name of the validated object.
    pub object_name: String,
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub default_message: String,
    /// The rejected value rendered as a string, `""` when it was null.
    pub rejected_value: String,
}

impl FieldError {
    /// Creates an error for a field of the event DTO.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
        rejected_value: Option<String>,
    ) -> Self {
        Self {
            field: field.into(),
            object_name: OBJECT_NAME.to_string(),
            code: code.into(),
            default_message: message.into(),
            rejected_value: rejected_value.unwrap_or_default(),
        }
    }

    fn from_validation(field: &str, error: &ValidationError) -> Self {
        let rejected = error.params.get("value").and_then(|v| match v {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });
        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{field} is invalid"));

        Self::new(field, error.code.to_string(), message, rejected)
    }
}

/// Checks an [`EventDto`] against the structural and business rules.
///
/// Reports problems as a list and never mutates the DTO. Holds no state,
/// so a single instance can be shared across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventValidator;

impl EventValidator {
    /// Creates a validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate against the current time.
    pub fn validate(&self, dto: &EventDto) -> Vec<FieldError> {
        self.validate_at(dto, Utc::now())
    }

    /// Validate against an explicit reference time.
    ///
    /// A date strictly before `now` is rejected; an absent date stands
    /// for `now` and always passes.
    pub fn validate_at(&self, dto: &EventDto, now: DateTime<Utc>) -> Vec<FieldError> {
        let mut errors = structural_errors(dto);

        if let Some(date) = dto.date {
            if date < now {
                errors.push(FieldError::new(
                    "date",
                    DATE_IN_PAST_CODE,
                    "date must not be earlier than the current time",
                    Some(date.to_rfc3339()),
                ));
            }
        }

        errors
    }
}

fn structural_errors(dto: &EventDto) -> Vec<FieldError> {
    let Err(errors) = dto.validate() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (field, list) in errors.field_errors() {
        for error in list.iter() {
            out.push(FieldError::from_validation(&field, error));
        }
    }
    // field_errors() is a HashMap
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}
