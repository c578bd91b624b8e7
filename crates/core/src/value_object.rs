//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A [`crate::StockKey`]
/// is a value object: every `A3` is the same `A3`. A stock unit carrying that key
/// is an [`crate::Entity`]: it has its own identity.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: helpful for logging, testing
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
