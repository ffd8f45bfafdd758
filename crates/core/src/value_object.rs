//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are interchangeable. To "modify" one, construct
/// a new one. [`crate::Money`] is the canonical example; a `Product` keyed
/// by its code is an entity, not a value object.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
