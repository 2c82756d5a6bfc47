//! Prelude module for convenient imports.
//!
//! A single `use onecondition::prelude::*;` brings in the error type, the
//! result alias, every check, and the [`type_set!`](crate::type_set) macro.
//!
//! # Examples
//!
//! ```
//! use onecondition::prelude::*;
//!
//! fn resize(width: u32, scale: f64) -> ValidationResult {
//!     not_zero(&width)?;
//!     positive(&scale)?;
//!     Ok(())
//! }
//!
//! assert!(resize(640, 1.5).is_ok());
//! assert!(resize(640, 0.0).is_err());
//! ```

// ============================================================================
// ERROR MODEL
// ============================================================================

pub use crate::error::{ValidationError, ValidationResult};

// ============================================================================
// CHECKS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::checks::*;

// ============================================================================
// MACROS
// ============================================================================

pub use crate::type_set;
