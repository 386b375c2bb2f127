//! Value object trait: equality by value, not identity.
//!
//! Menu items and payments have **no identity**: two payments for the same
//! table, type and amount are indistinguishable, and the payment log may hold
//! both.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; repositories only ever append or hand out clones.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(Decimal);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
