//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a price of `199/100` is the same as any other `199/100`)
/// - **Entity**: has identity (two products with the same ID are the same product)
///
/// The trait requires:
/// - **Clone**: value objects are copied across boundaries, never shared
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (logging, testing)
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price {
///     value: i64,
///     multiplier: i64,
/// }
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
