//! Built-in checks.
//!
//! Every check tests exactly one condition about one value and either
//! returns `Ok(())` or fails with the crate's uniform
//! [`ValidationError`](crate::ValidationError). Checks never call each
//! other and never mutate the value; stacking `?`-propagated calls at a
//! function boundary is the intended composition:
//!
//! ```
//! use onecondition::prelude::*;
//!
//! fn connect(host: &str, port: u16, retries: i32) -> ValidationResult {
//!     not_blank(host)?;
//!     not_zero(&port)?;
//!     not_negative(&retries)?;
//!     Ok(())
//! }
//!
//! assert!(connect("db.internal", 5432, 3).is_ok());
//! assert!(connect("db.internal", 0, 3).is_err());
//! ```
//!
//! # Categories
//!
//! - **Type membership**: [`instance`], [`not_instance`] over a [`TypeSet`]
//! - **Nullability**: [`required`], [`none`]
//! - **Numeric sign**: [`zero`], [`not_zero`], [`positive`], [`not_positive`],
//!   [`negative`], [`not_negative`]
//! - **Comparison**: [`eq`], [`neq`], [`gt`], [`gte`], [`lt`], [`lte`]
//! - **Range**: [`in_range`], [`in_range_exclusive`], [`not_in_range`],
//!   [`not_in_range_exclusive`]
//! - **Set membership**: [`one_of`], [`none_of`]
//! - **String shape**: [`not_empty`], [`not_blank`], [`alphanumeric`],
//!   [`matches`](string::matches) (with the `pattern` feature)
//!
//! The set is intentionally open-ended: a new check is any function that
//! evaluates one predicate and fails through
//! [`ValidationError::new`](crate::ValidationError::new).

pub mod compare;
pub mod nullable;
pub mod properties;
pub mod range;
pub mod set;
pub mod string;
pub mod types;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use compare::{eq, gt, gte, lt, lte, neq};
pub use nullable::{none, required};
pub use properties::{Zero, negative, not_negative, not_positive, not_zero, positive, zero};
pub use range::{in_range, in_range_exclusive, not_in_range, not_in_range_exclusive};
pub use set::{none_of, one_of};
#[cfg(feature = "pattern")]
pub use string::matches;
pub use string::{alphanumeric, not_blank, not_empty};
pub use types::{TypeSet, instance, not_instance};
