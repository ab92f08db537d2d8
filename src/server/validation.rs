// Request validation helpers shared by the route handlers
//
// Field checks mirror the public API contract: trimmed text fields with
// length bounds, numeric ranges, and required-field messages like
// "Domain is required". Failures map to 400 responses.

use super::error::ApiError;

/// Require a non-empty text field, returning its trimmed value
pub fn require_text(value: Option<&str>, field: &str) -> Result<String, ApiError> {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Check a text field's length bounds
pub fn check_length(value: &str, field: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < min || len > max {
        if min <= 1 {
            return Err(ApiError::bad_request(format!(
                "{} must not exceed {} characters",
                field, max
            )));
        }
        return Err(ApiError::bad_request(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

/// Trim an optional text field and enforce its maximum length; empty strings
/// collapse to None
pub fn optional_text(
    value: Option<&str>,
    field: &str,
    max: usize,
) -> Result<Option<String>, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(trimmed) => {
            check_length(trimmed, field, 0, max)?;
            Ok(Some(trimmed.to_string()))
        }
        None => Ok(None),
    }
}

/// Check a numeric field's range
pub fn check_range(value: u32, field: &str, min: u32, max: u32) -> Result<(), ApiError> {
    if value < min || value > max {
        return Err(ApiError::bad_request(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}

/// Check an experience level against the accepted set
pub fn check_experience(value: &str) -> Result<(), ApiError> {
    match value {
        "Beginner" | "Intermediate" | "Advanced" => Ok(()),
        _ => Err(ApiError::bad_request(
            "Experience must be Beginner, Intermediate, or Advanced",
        )),
    }
}
