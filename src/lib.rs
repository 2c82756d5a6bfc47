//! # onecondition
//!
//! Atomic checks that each test exactly one condition about one value and
//! fail fast with a uniform, readable error.
//!
//! Call sites read as a declarative list of preconditions: each line asserts
//! one nameable rule, and the first violated rule stops the sequence with an
//! error that says what was expected and what was received.
//!
//! ## Quick Start
//!
//! ```
//! use onecondition::prelude::*;
//!
//! fn set_ratio(ratio: f64) -> ValidationResult {
//!     in_range(&ratio, &0.0, &1.0)?;
//!     not_zero(&ratio)?;
//!     Ok(())
//! }
//!
//! assert!(set_ratio(0.5).is_ok());
//! assert_eq!(
//!     set_ratio(1.5).unwrap_err().to_string(),
//!     "Value `1.5` must be no greater than `1.0` (upper bound of `0.0` to `1.0`, inclusive)",
//! );
//! ```
//!
//! ## The one error
//!
//! Every failure is a [`ValidationError`]: the rejected value's `Debug`
//! rendering plus the violated condition, rendered as
//! `` Value `{value}` must {condition} ``. There is no error taxonomy to
//! match on — callers that need to distinguish causes inspect the condition
//! text or the value.
//!
//! ## What this crate is not
//!
//! There are no combinators, no rule chaining, and no failure aggregation.
//! Checks never transform or repair the value. Composing conditions is the
//! caller's job: stack `?`-propagated calls and the first failure wins.
//!
//! ## Built-in checks
//!
//! See [`checks`] for the full list: type membership ([`checks::instance`]),
//! nullability ([`checks::required`]), numeric sign ([`checks::positive`]),
//! comparison ([`checks::eq`]), range ([`checks::in_range`]), set membership
//! ([`checks::one_of`]), and string shape ([`checks::not_empty`],
//! [`checks::matches`](checks::string::matches) with the `pattern` feature).

pub mod checks;
pub mod error;
pub mod prelude;

pub use error::{ValidationError, ValidationResult};
