//! Entity trait: identity + continuity across ownership transfers.

/// Entity marker + minimal interface.
///
/// Two entities with equal attributes are still distinct if their ids differ
/// (two stock units of the same key are two different units).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
