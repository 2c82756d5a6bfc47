//! Set membership checks.
//!
//! Membership uses the element type's native equality over a slice of
//! allowed (or forbidden) values.

use std::fmt;

use crate::error::{ValidationError, ValidationResult};

/// Validates that a value is one of the allowed values.
///
/// # Examples
///
/// ```
/// use onecondition::checks::one_of;
///
/// assert!(one_of(&"gzip", &["gzip", "zstd", "none"]).is_ok());
/// assert_eq!(
///     one_of(&"lz4", &["gzip", "zstd", "none"]).unwrap_err().to_string(),
///     "Value `\"lz4\"` must be one of `[\"gzip\", \"zstd\", \"none\"]`",
/// );
/// ```
pub fn one_of<T>(value: &T, allowed: &[T]) -> ValidationResult
where
    T: PartialEq + fmt::Debug,
{
    if allowed.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            value,
            format!("be one of `{allowed:?}`"),
        ))
    }
}

/// Validates that a value is none of the forbidden values.
pub fn none_of<T>(value: &T, forbidden: &[T]) -> ValidationResult
where
    T: PartialEq + fmt::Debug,
{
    if forbidden.contains(value) {
        Err(ValidationError::new(
            value,
            format!("not be one of `{forbidden:?}`"),
        ))
    } else {
        Ok(())
    }
}
