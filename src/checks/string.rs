//! String shape checks.
//!
//! These operate on `&str`, so "value is a string" is already guaranteed by
//! the type; only the shape predicate is checked at runtime.

use crate::error::{ValidationError, ValidationResult};

/// Validates that a string is not empty.
pub fn not_empty(value: &str) -> ValidationResult {
    if value.is_empty() {
        Err(ValidationError::new(value, "not be empty"))
    } else {
        Ok(())
    }
}

/// Validates that a string contains at least one non-whitespace character.
pub fn not_blank(value: &str) -> ValidationResult {
    if value.chars().any(|ch| !ch.is_whitespace()) {
        Ok(())
    } else {
        Err(ValidationError::new(value, "not be blank"))
    }
}

/// Validates that every character is alphanumeric.
///
/// The empty string passes vacuously; stack with [`not_empty`] to exclude
/// it.
pub fn alphanumeric(value: &str) -> ValidationResult {
    if value.chars().all(char::is_alphanumeric) {
        Ok(())
    } else {
        Err(ValidationError::new(
            value,
            "contain only alphanumeric characters",
        ))
    }
}

/// Validates that a string matches a compiled pattern.
///
/// The caller compiles the pattern once; the check only runs it.
///
/// # Examples
///
/// ```
/// use onecondition::checks::matches;
/// use regex::Regex;
///
/// let semverish = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
/// assert!(matches("1.2.3", &semverish).is_ok());
/// assert_eq!(
///     matches("1.2", &semverish).unwrap_err().to_string(),
///     r#"Value `"1.2"` must match the pattern `^\d+\.\d+\.\d+$`"#,
/// );
/// ```
#[cfg(feature = "pattern")]
pub fn matches(value: &str, pattern: &regex::Regex) -> ValidationResult {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            value,
            format!("match the pattern `{pattern}`"),
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_empty_rejects_only_empty() {
        assert!(not_empty("x").is_ok());
        assert!(not_empty(" ").is_ok());
        let err = not_empty("").unwrap_err();
        assert_eq!(err.to_string(), "Value `\"\"` must not be empty");
    }

    #[test]
    fn not_blank_rejects_whitespace_only() {
        assert!(not_blank("  x  ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t\n").is_err());
    }

    #[test]
    fn alphanumeric_checks_every_char() {
        assert!(alphanumeric("abc123").is_ok());
        assert!(alphanumeric("").is_ok());
        let err = alphanumeric("abc-123").unwrap_err();
        assert_eq!(err.condition, "contain only alphanumeric characters");
    }

    #[cfg(feature = "pattern")]
    #[test]
    fn matches_reports_the_pattern() {
        let re = regex::Regex::new("^a+$").unwrap();
        assert!(matches("aaa", &re).is_ok());
        let err = matches("abc", &re).unwrap_err();
        assert_eq!(err.condition, "match the pattern `^a+$`");
    }
}
