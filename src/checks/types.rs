//! Type membership checks.
//!
//! [`instance`] and [`not_instance`] test a value's runtime type against a
//! [`TypeSet`] of accepted types. The set carries the type names alongside
//! the `TypeId`s so a failure can list every accepted type verbatim.
//!
//! These checks require the value's type to be `'static` (the `Any` bound);
//! borrowed types like `&'a str` are covered through their unsized target
//! (`str`).

use std::any::{Any, TypeId, type_name};
use std::fmt;

use smallvec::SmallVec;

use crate::error::{ValidationError, ValidationResult};

// ============================================================================
// TYPE SET
// ============================================================================

/// A runtime set of accepted types.
///
/// Built with [`TypeSet::of`] / [`TypeSet::with`], or the [`type_set!`]
/// macro for the common literal case:
///
/// ```
/// use onecondition::checks::{TypeSet, instance};
/// use onecondition::type_set;
///
/// let numeric = type_set![i64, f64];
/// assert_eq!(numeric.to_string(), "(i64, f64)");
/// assert!(instance(&4_i64, &numeric).is_ok());
///
/// let same = TypeSet::of::<i64>().with::<f64>();
/// assert_eq!(numeric, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet {
    entries: SmallVec<[(TypeId, &'static str); 4]>,
}

impl TypeSet {
    /// Creates an empty set. An empty set accepts no type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Creates a set accepting a single type.
    #[must_use]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self::new().with::<T>()
    }

    /// Adds a type to the set.
    #[must_use]
    pub fn with<T: Any + ?Sized>(mut self) -> Self {
        self.entries.push((TypeId::of::<T>(), type_name::<T>()));
        self
    }

    /// Whether the set accepts the type with the given id.
    #[must_use]
    pub fn contains(&self, id: TypeId) -> bool {
        self.entries.iter().any(|(accepted, _)| *accepted == id)
    }

    /// Number of accepted types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TypeSet {
    /// Renders as a parenthesized list of short type names: `(i64, f64)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, (_, name)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&short_type_name(name))?;
        }
        f.write_str(")")
    }
}

/// Builds a [`TypeSet`] from a list of types: `type_set![i64, f64]`.
#[macro_export]
macro_rules! type_set {
    ($($ty:ty),+ $(,)?) => {
        $crate::checks::types::TypeSet::new()$(.with::<$ty>())+
    };
}

// ============================================================================
// CHECKS
// ============================================================================

/// Validates that the value's runtime type is one of an accepted set.
///
/// # Examples
///
/// ```
/// use onecondition::checks::instance;
/// use onecondition::type_set;
///
/// let numeric = type_set![i64, f64];
/// assert!(instance(&4_i64, &numeric).is_ok());
/// assert_eq!(
///     instance("foobar", &numeric).unwrap_err().to_string(),
///     "Value `\"foobar\"` must be an instance of (i64, f64), not a str",
/// );
/// ```
pub fn instance<V>(value: &V, accepted: &TypeSet) -> ValidationResult
where
    V: Any + fmt::Debug + ?Sized,
{
    if accepted.contains(TypeId::of::<V>()) {
        Ok(())
    } else {
        Err(ValidationError::new(
            value,
            format!(
                "be an instance of {accepted}, not a {}",
                short_type_name(type_name::<V>())
            ),
        ))
    }
}

/// Validates that the value's runtime type is not in the given set.
pub fn not_instance<V>(value: &V, rejected: &TypeSet) -> ValidationResult
where
    V: Any + fmt::Debug + ?Sized,
{
    if rejected.contains(TypeId::of::<V>()) {
        Err(ValidationError::new(
            value,
            format!("not be an instance of {rejected}"),
        ))
    } else {
        Ok(())
    }
}

// ============================================================================
// TYPE NAME RENDERING
// ============================================================================

/// Strips module paths from a `type_name` rendering, inside generics too:
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            flush_segment(&mut out, &mut segment);
            out.push(ch);
        }
    }
    flush_segment(&mut out, &mut segment);
    out
}

fn flush_segment(out: &mut String, segment: &mut String) {
    if let Some(last) = segment.rsplit("::").next() {
        out.push_str(last);
    }
    segment.clear();
}

// ============================================================================
// TESTS
// ============================================================================
