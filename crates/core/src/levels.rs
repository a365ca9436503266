//! Range checks for the scores a user enters against a criterion.

use crate::error::CoreError;

/// Lowest maturity level / score.
pub const MIN_LEVEL: i32 = 1;
/// Highest maturity level / score.
pub const MAX_LEVEL: i32 = 5;

/// Longest free-text note accepted on a response or impact validation.
pub const MAX_NOTES_LEN: usize = 4000;

/// Check an optional 1-5 score. Absent values are accepted.
pub fn validate_level(field: &str, value: Option<i32>) -> Result<(), CoreError> {
    match value {
        Some(v) if !(MIN_LEVEL..=MAX_LEVEL).contains(&v) => Err(CoreError::Validation(format!(
            "{field} must be between {MIN_LEVEL} and {MAX_LEVEL}, got {v}"
        ))),
        _ => Ok(()),
    }
}

pub fn validate_notes(field: &str, notes: Option<&str>) -> Result<(), CoreError> {
    match notes {
        Some(n) if n.chars().count() > MAX_NOTES_LEN => Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NOTES_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// The scores carried by one response upsert.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseScores {
    pub as_is_level: Option<i32>,
    pub to_be_level: Option<i32>,
    pub importance: Option<i32>,
    pub confidence: Option<i32>,
}

impl ResponseScores {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_level("as_is_level", self.as_is_level)?;
        validate_level("to_be_level", self.to_be_level)?;
        validate_level("importance", self.importance)?;
        validate_level("confidence", self.confidence)?;
        Ok(())
    }
}

/// Require that a JSON payload is an object (e.g. onboarding data).
pub fn validate_object(field: &str, value: &serde_json::Value) -> Result<(), CoreError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("{field} must be a JSON object")))
    }
}
