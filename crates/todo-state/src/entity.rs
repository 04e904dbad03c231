//! Core Entity Trait
//!
//! Anything rendered as a keyed row must expose a stable identifier.

/// Contract for values with a stable identity
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
