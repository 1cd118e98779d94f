//! Shared validation helpers for the check-in and check-out forms.
//!
//! Failures become `invalid_request` errors whose details name the offending
//! field, e.g. `{"field": "nights", "value": "0", "code": "invalid_nights"}`.

use serde_json::json;

use crate::domain::{Error, Nights, RoomNumber};

/// Validation error codes for form failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidNights,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            ValidationCode::MissingField => "missing_field",
            ValidationCode::InvalidNights => "invalid_nights",
        }
    }
}

/// Name of a form field, as submitted by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_nights_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a whole number of at least 1")).with_details(
        json!({
            "field": field,
            "value": value,
            "code": ValidationCode::InvalidNights.as_str(),
        }),
    )
}

/// Require a non-blank value, returning it trimmed.
pub(crate) fn required_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_owned()),
        _ => Err(missing_field_error(field)),
    }
}

/// Parse a stay length of at least one night.
pub(crate) fn parse_nights(value: Option<String>, field: FieldName) -> Result<Nights, Error> {
    let raw = required_text(value, field)?;
    raw.parse::<u32>()
        .ok()
        .and_then(|nights| Nights::new(nights).ok())
        .ok_or_else(|| invalid_nights_error(field, &raw))
}

/// Parse a room number, returning `None` for anything that is not a
/// non-negative integer.
pub(crate) fn parse_room_number(value: Option<&str>) -> Option<RoomNumber> {
    value.and_then(|raw| raw.parse().ok())
}
