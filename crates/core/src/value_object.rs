//! Value object trait: equality by value, not identity.
//!
//! Everything the statement pipeline produces (amounts, enriched lines, the
//! statement itself) is a value: built once per request, never mutated, and
//! discarded after rendering.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two statements
/// computed from the same invoice and catalog are equal, and rendering them
/// yields byte-identical output.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Cents(u64);
///
/// impl ValueObject for Cents {}
///
/// assert_eq!(Cents(65000), Cents(65000));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
