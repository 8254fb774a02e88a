//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities carry no value equality. Two instances with equal fields are still
/// distinct; compare shared instances with `Arc::ptr_eq` when identity matters.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
