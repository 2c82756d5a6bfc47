//! Presence checks for `Option` values.

use std::fmt;

use crate::error::{ValidationError, ValidationResult};

/// Validates that an `Option` holds a value.
///
/// # Examples
///
/// ```
/// use onecondition::checks::required;
///
/// assert!(required(&Some(42)).is_ok());
/// assert_eq!(
///     required(&None::<i32>).unwrap_err().to_string(),
///     "Value `None` must not be `None`",
/// );
/// ```
pub fn required<T: fmt::Debug>(value: &Option<T>) -> ValidationResult {
    if value.is_some() {
        Ok(())
    } else {
        Err(ValidationError::new(value, "not be `None`"))
    }
}

/// Validates that an `Option` is `None`.
pub fn none<T: fmt::Debug>(value: &Option<T>) -> ValidationResult {
    if value.is_none() {
        Ok(())
    } else {
        Err(ValidationError::new(value, "be `None`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_needs_some() {
        assert!(required(&Some("x")).is_ok());
        assert!(required(&None::<&str>).is_err());
    }

    #[test]
    fn none_needs_none() {
        assert!(none(&None::<i32>).is_ok());
        let err = none(&Some(5)).unwrap_err();
        assert_eq!(err.to_string(), "Value `Some(5)` must be `None`");
    }
}
