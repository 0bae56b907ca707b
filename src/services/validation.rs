// src/services/validation.rs
// DOCUMENTATION: Parse helpers for request input
// PURPOSE: Turn raw body/query values into typed values or a SchoolsError.
// Range checks live on the validator derives in models::school.

use crate::errors::SchoolsError;
use serde_json::Value;

/// Require a non-blank text field, returning it trimmed
pub fn require_text(field: &str, value: Option<String>) -> Result<String, SchoolsError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SchoolsError::MissingField(field.to_string())),
    }
}

/// Require a raw query-string value, rejecting absent or blank input
pub fn require_param<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, SchoolsError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SchoolsError::MissingField(field.to_string())),
    }
}

/// Require a JSON coordinate, given either as a number or a decimal string
pub fn require_json_coordinate(field: &str, value: Option<&Value>) -> Result<f64, SchoolsError> {
    match value {
        None | Some(Value::Null) => Err(SchoolsError::MissingField(field.to_string())),
        Some(Value::Number(n)) => {
            let parsed = n
                .as_f64()
                .ok_or_else(|| SchoolsError::InvalidNumber(field.to_string()))?;
            require_finite(field, parsed)
        }
        Some(Value::String(s)) => {
            let raw = require_param(field, Some(s.as_str()))?;
            parse_coordinate(field, raw)
        }
        Some(_) => Err(SchoolsError::InvalidNumber(field.to_string())),
    }
}

/// Parse a decimal string coordinate
pub fn parse_coordinate(field: &str, raw: &str) -> Result<f64, SchoolsError> {
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SchoolsError::InvalidNumber(field.to_string()))?;

    require_finite(field, parsed)
}

fn require_finite(field: &str, value: f64) -> Result<f64, SchoolsError> {
    // "NaN" and "inf" parse as f64 but are not coordinates
    if !value.is_finite() {
        return Err(SchoolsError::InvalidNumber(field.to_string()));
    }
    Ok(value)
}
