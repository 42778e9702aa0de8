//! Field validation for the idea, experiment, outcome, and reflection forms.
//!
//! Each field validator is pure and returns a [`FieldCheck`] (`{ valid,
//! error? }`), the same shape the web forms display inline. The per-form
//! helpers run the field rules in order and convert the first failure into
//! [`CoreError::Validation`] so handlers can use `?`.
//!
//! Lengths are measured in characters after trimming surrounding whitespace,
//! except for the outcome result which must match exactly.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Length limits
// ---------------------------------------------------------------------------

pub const TITLE_MIN_LENGTH: usize = 3;
pub const TITLE_MAX_LENGTH: usize = 100;

pub const DESCRIPTION_MIN_LENGTH: usize = 1;
pub const DESCRIPTION_MAX_LENGTH: usize = 2000;

pub const HYPOTHESIS_MIN_LENGTH: usize = 1;
pub const HYPOTHESIS_MAX_LENGTH: usize = 500;

pub const REFLECTION_MIN_LENGTH: usize = 15;
pub const REFLECTION_MAX_LENGTH: usize = 5000;

pub const OUTCOME_NOTES_MAX_LENGTH: usize = 1000;

/// Calendar date format accepted for experiment start/end dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted outcome results (case-sensitive).
pub const OUTCOME_RESULTS: &[&str] = &["Success", "Mixed", "Failed"];

// ---------------------------------------------------------------------------
// FieldCheck
// ---------------------------------------------------------------------------

/// Result of validating a single field (or a small group of fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Convert into a `Result` for use with `?`.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.valid {
            Ok(())
        } else {
            Err(CoreError::Validation(
                self.error.unwrap_or_else(|| "Invalid value".into()),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Shared rules
// ---------------------------------------------------------------------------

/// Required + trimmed length bounds (inclusive).
fn check_length(field: &str, value: &str, min: usize, max: usize) -> FieldCheck {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldCheck::fail(format!("{field} is required"));
    }
    let len = trimmed.chars().count();
    if len < min {
        return FieldCheck::fail(format!(
            "{field} must be at least {min} characters (got {len})"
        ));
    }
    if len > max {
        return FieldCheck::fail(format!(
            "{field} must be at most {max} characters (got {len})"
        ));
    }
    FieldCheck::ok()
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

pub fn validate_title(title: &str) -> FieldCheck {
    check_length("Title", title, TITLE_MIN_LENGTH, TITLE_MAX_LENGTH)
}

pub fn validate_description(description: &str) -> FieldCheck {
    check_length(
        "Description",
        description,
        DESCRIPTION_MIN_LENGTH,
        DESCRIPTION_MAX_LENGTH,
    )
}

pub fn validate_hypothesis(hypothesis: &str) -> FieldCheck {
    check_length(
        "Hypothesis",
        hypothesis,
        HYPOTHESIS_MIN_LENGTH,
        HYPOTHESIS_MAX_LENGTH,
    )
}

pub fn validate_reflection_content(content: &str) -> FieldCheck {
    check_length(
        "Reflection",
        content,
        REFLECTION_MIN_LENGTH,
        REFLECTION_MAX_LENGTH,
    )
}

/// The result must be exactly one of [`OUTCOME_RESULTS`]; no trimming.
pub fn validate_outcome_result(result: &str) -> FieldCheck {
    if result.trim().is_empty() {
        return FieldCheck::fail("Result is required");
    }
    if OUTCOME_RESULTS.contains(&result) {
        FieldCheck::ok()
    } else {
        FieldCheck::fail(invalid_outcome_result_message(result))
    }
}

/// Message for a result outside [`OUTCOME_RESULTS`].
pub fn invalid_outcome_result_message(result: &str) -> String {
    format!("Invalid result '{result}'. Must be one of: {OUTCOME_RESULTS:?}")
}

/// Notes are optional; when present they are capped at
/// [`OUTCOME_NOTES_MAX_LENGTH`] characters.
pub fn validate_outcome_notes(notes: Option<&str>) -> FieldCheck {
    match notes {
        Some(notes) if notes.chars().count() > OUTCOME_NOTES_MAX_LENGTH => {
            FieldCheck::fail(format!(
                "Notes must be at most {OUTCOME_NOTES_MAX_LENGTH} characters (got {})",
                notes.chars().count()
            ))
        }
        _ => FieldCheck::ok(),
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "{field} '{value}' is not a valid date (expected YYYY-MM-DD)"
        ))
    })
}

pub fn validate_date(field: &str, value: &str) -> FieldCheck {
    match parse_date(field, value) {
        Ok(_) => FieldCheck::ok(),
        Err(CoreError::Validation(message)) => FieldCheck::fail(message),
        Err(other) => FieldCheck::fail(other.to_string()),
    }
}

/// Both dates must parse and `end` must not precede `start` (equal is fine).
pub fn validate_date_range(start: &str, end: &str) -> FieldCheck {
    let start_check = validate_date("Start date", start);
    if !start_check.is_valid() {
        return start_check;
    }
    let end_check = validate_date("End date", end);
    if !end_check.is_valid() {
        return end_check;
    }
    match (parse_date("Start date", start), parse_date("End date", end)) {
        (Ok(s), Ok(e)) if e < s => FieldCheck::fail(format!(
            "End date {e} must not be before start date {s}"
        )),
        _ => FieldCheck::ok(),
    }
}

// ---------------------------------------------------------------------------
// Form validators
// ---------------------------------------------------------------------------

pub fn validate_idea_form(title: &str, description: &str) -> Result<(), CoreError> {
    validate_title(title).into_result()?;
    validate_description(description).into_result()
}

/// Validate an experiment form and return the parsed `(start, end)` dates.
pub fn validate_experiment_form(
    title: &str,
    hypothesis: &str,
    start_date: &str,
    end_date: &str,
) -> Result<(NaiveDate, NaiveDate), CoreError> {
    validate_title(title).into_result()?;
    validate_hypothesis(hypothesis).into_result()?;
    validate_date_range(start_date, end_date).into_result()?;
    Ok((
        parse_date("Start date", start_date)?,
        parse_date("End date", end_date)?,
    ))
}

pub fn validate_outcome_form(result: &str, notes: Option<&str>) -> Result<(), CoreError> {
    validate_outcome_result(result).into_result()?;
    validate_outcome_notes(notes).into_result()
}

pub fn validate_reflection_form(content: &str) -> Result<(), CoreError> {
    validate_reflection_content(content).into_result()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("abc").is_valid());
        assert!(!validate_title("ab").is_valid());
        assert!(validate_title(&"a".repeat(100)).is_valid());
        assert!(!validate_title(&"a".repeat(101)).is_valid());
    }

    #[test]
    fn title_is_trimmed_before_measuring() {
        assert!(!validate_title("  ab  ").is_valid());
        assert!(validate_title("  abc  ").is_valid());
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let check = validate_title("   \t ");
        assert!(!check.valid);
        assert_eq!(check.error.as_deref(), Some("Title is required"));
        assert!(!validate_description("").is_valid());
        assert!(!validate_hypothesis("\n").is_valid());
    }

    #[test]
    fn description_bounds() {
        assert!(validate_description("x").is_valid());
        assert!(validate_description(&"d".repeat(2000)).is_valid());
        assert!(!validate_description(&"d".repeat(2001)).is_valid());
    }

    #[test]
    fn hypothesis_bounds() {
        assert!(validate_hypothesis("h").is_valid());
        assert!(validate_hypothesis(&"h".repeat(500)).is_valid());
        assert!(!validate_hypothesis(&"h".repeat(501)).is_valid());
    }

    #[test]
    fn reflection_bounds() {
        assert!(!validate_reflection_content(&"r".repeat(14)).is_valid());
        assert!(validate_reflection_content(&"r".repeat(15)).is_valid());
        assert!(validate_reflection_content(&"r".repeat(5000)).is_valid());
        assert!(!validate_reflection_content(&"r".repeat(5001)).is_valid());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 3 characters, 9 bytes.
        assert!(validate_title("日本語").is_valid());
    }

    #[test]
    fn outcome_result_is_exact() {
        for ok in ["Success", "Mixed", "Failed"] {
            assert!(validate_outcome_result(ok).is_valid(), "{ok} should be accepted");
        }
        for bad in ["success", "Pass", " Success ", "FAILED", ""] {
            assert!(!validate_outcome_result(bad).is_valid(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn outcome_notes_are_optional_and_capped() {
        assert!(validate_outcome_notes(None).is_valid());
        assert!(validate_outcome_notes(Some("")).is_valid());
        assert!(validate_outcome_notes(Some(&"n".repeat(1000))).is_valid());
        assert!(!validate_outcome_notes(Some(&"n".repeat(1001))).is_valid());
    }

    #[test]
    fn dates_must_be_real_calendar_dates() {
        assert!(validate_date("Start date", "2024-02-29").is_valid());
        assert!(!validate_date("Start date", "2023-02-29").is_valid());
        assert!(!validate_date("Start date", "2024-13-01").is_valid());
        assert!(!validate_date("Start date", "tomorrow").is_valid());
        assert!(!validate_date("Start date", "").is_valid());
    }

    #[test]
    fn date_range_allows_equal_dates() {
        assert!(validate_date_range("2024-05-01", "2024-05-01").is_valid());
        assert!(validate_date_range("2024-05-01", "2024-06-01").is_valid());
        let check = validate_date_range("2024-05-02", "2024-05-01");
        assert!(!check.valid);
        assert!(check.error.unwrap().contains("must not be before"));
    }

    #[test]
    fn into_result_maps_to_validation_error() {
        assert!(FieldCheck::ok().into_result().is_ok());
        assert_matches!(
            FieldCheck::fail("nope").into_result(),
            Err(CoreError::Validation(msg)) if msg == "nope"
        );
    }

    #[test]
    fn experiment_form_returns_parsed_dates() {
        let (start, end) =
            validate_experiment_form("Try it", "It works", "2024-01-01", "2024-01-31").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        assert_matches!(
            validate_experiment_form("Try it", "", "2024-01-01", "2024-01-31"),
            Err(CoreError::Validation(msg)) if msg == "Hypothesis is required"
        );
    }

    #[test]
    fn field_check_serializes_without_empty_error() {
        let json = serde_json::to_value(FieldCheck::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true }));
    }
}
