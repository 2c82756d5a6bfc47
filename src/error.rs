//! The uniform validation failure type.
//!
//! Every check in this crate fails with [`ValidationError`] — one error kind
//! for every condition failure, deliberately flat. Callers that need to
//! distinguish failure causes inspect the [`condition`](ValidationError::condition)
//! text or the rejected value, not a taxonomy of variants, because none
//! exists.
//!
//! String fields use `Cow<'static, str>` where the common case is a static
//! string, so parameterless checks build their error without allocating the
//! condition.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A failed condition: the rejected value and the predicate it violated.
///
/// The rendered message follows one fixed contract for every check:
///
/// ```text
/// Value `{value}` must {condition}
/// ```
///
/// where `value` is the `Debug` rendering of the rejected value — the most
/// precise distinguishing representation available, so `0` and `"0"` render
/// differently — and `condition` is the check's predicate description with
/// any bounds or reference values filled in.
///
/// # Examples
///
/// ```
/// use onecondition::checks::positive;
///
/// let err = positive(&0).unwrap_err();
/// assert_eq!(err.to_string(), "Value `0` must be positive (non-zero)");
/// assert_eq!(err.value, "0");
/// assert_eq!(err.condition, "be positive (non-zero)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("Value `{value}` must {condition}")]
pub struct ValidationError {
    /// `Debug` rendering of the rejected value, captured at failure time.
    ///
    /// Rendered rather than borrowed: a borrowed value would put a lifetime
    /// on the error and stop it propagating into `'static` error contexts.
    pub value: String,

    /// Description of the violated condition, e.g. `be positive (non-zero)`.
    ///
    /// Fixed per check; parameterized checks fill in their bound, reference
    /// value, or accepted set.
    pub condition: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an error from the rejected value and the violated condition.
    ///
    /// Checks call this at the moment their predicate fails; the error is
    /// never constructed on the success path.
    pub fn new<V>(value: &V, condition: impl Into<Cow<'static, str>>) -> Self
    where
        V: fmt::Debug + ?Sized,
    {
        Self {
            value: format!("{value:?}"),
            condition: condition.into(),
        }
    }

    /// The fully rendered message, identical to the `Display` output.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// RESULT ALIAS
// ============================================================================

/// Result of a check: `Ok(())` when the condition holds.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_contract() {
        let err = ValidationError::new(&0, "be positive (non-zero)");
        assert_eq!(err.to_string(), "Value `0` must be positive (non-zero)");
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn value_renders_via_debug() {
        // `0` and `"0"` must stay distinguishable.
        let from_int = ValidationError::new(&0, "be zero");
        let from_str = ValidationError::new("0", "be zero");
        assert_eq!(from_int.value, "0");
        assert_eq!(from_str.value, "\"0\"");
        assert_ne!(from_int, from_str);
    }

    #[test]
    fn static_condition_does_not_allocate() {
        let err = ValidationError::new(&1, "be zero");
        assert!(matches!(err.condition, Cow::Borrowed(_)));
    }

    #[test]
    fn dynamic_condition_is_owned() {
        let err = ValidationError::new(&1, format!("be equal to `{}`", 2));
        assert!(matches!(err.condition, Cow::Owned(_)));
    }

    #[test]
    fn implements_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ValidationError::new(&1, "be zero"));
    }
}
