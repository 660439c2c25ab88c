//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidNumber,
    OutOfRange,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidNumber => "invalid_number",
            Self::OutOfRange => "out_of_range",
        }
    }
}

fn field_error(field: &str, message: String, code: ValidationCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: &str) -> Error {
    field_error(
        field,
        format!("missing required field: {field}"),
        ValidationCode::MissingField,
    )
}

pub(crate) fn invalid_number_error(field: &str) -> Error {
    field_error(
        field,
        format!("{field} must be a number"),
        ValidationCode::InvalidNumber,
    )
}

pub(crate) fn out_of_range_error(field: &str, minimum: u64) -> Error {
    field_error(
        field,
        format!("{field} must be at least {minimum}"),
        ValidationCode::OutOfRange,
    )
}
