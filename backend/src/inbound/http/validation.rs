//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejected request body is reported through the JSON [`Error`]
//! payload, including bodies actix cannot decode at all.

use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::warn;

use crate::domain::Error;

/// Validation error codes placed in the `details.code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidNumber,
    InvalidRegion,
    MalformedBody,
}

impl ValidationCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidNumber => "invalid_number",
            Self::InvalidRegion => "invalid_region",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Report every absent field in one error, e.g.
/// `invalid json: state is required, border is required`.
pub(crate) fn missing_fields_error(fields: &[FieldName]) -> Error {
    let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
    let message = names
        .iter()
        .map(|name| format!("{name} is required"))
        .collect::<Vec<_>>()
        .join(", ");
    Error::invalid_request(format!("invalid json: {message}")).with_details(json!({
        "fields": names,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} is required")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_number_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("invalid {field}: {value}")).with_details(json!({
        "field": field,
        "value": value,
        "code": ValidationCode::InvalidNumber.as_str(),
    }))
}

/// Parse a required, finite floating-point form field.
pub(crate) fn parse_required_f64(value: Option<&str>, field: FieldName) -> Result<f64, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| invalid_number_error(field, raw))
}

pub(crate) fn invalid_region_error(reason: &impl std::fmt::Display) -> Error {
    Error::invalid_request(reason.to_string()).with_details(json!({
        "code": ValidationCode::InvalidRegion.as_str(),
    }))
}

fn malformed_body_error(reason: &impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("invalid request body: {reason}")).with_details(json!({
        "code": ValidationCode::MalformedBody.as_str(),
    }))
}

/// JSON extractor configuration that reports decode failures as [`Error`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        warn!(path = %req.path(), error = %err, "rejected JSON body");
        malformed_body_error(&err).into()
    })
}

/// Form extractor configuration that reports decode failures as [`Error`].
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req: &HttpRequest| {
        warn!(path = %req.path(), error = %err, "rejected form body");
        malformed_body_error(&err).into()
    })
}
