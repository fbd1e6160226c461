//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Orders are entities: two orders with the same id are the same order, which
/// is what the pending-list uniqueness check relies on.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this entity carries the given identifier.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
