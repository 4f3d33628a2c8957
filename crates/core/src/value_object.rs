//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same
/// attribute values are interchangeable. They are immutable once built; to
/// "change" one, construct a new one.
///
/// ```
/// use wizcoin_core::ValueObject;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Knuts(u64);
///
/// impl ValueObject for Knuts {}
///
/// assert_eq!(Knuts(29), Knuts(29));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
