//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every read-only resource (a product, a
//! category, …) must implement to be served by the generic `ResourceActor`. It fixes the
//! identifier type and tells the actor how to read an entity's id so the actor can build
//! its lookup index.
//!
//! # Architecture Note
//! The actor only ever hands out *clones* of its entities. The canonical collection stays
//! inside the actor task for its whole lifetime, so consumers can never mutate it and
//! no locking is required.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::validate`]
//!
//! You do **not** need to implement `validate` unless the entity has invariants worth
//! checking before the actor accepts its seed. The default accepts everything.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be served by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that every resource type must satisfy, the
/// `ResourceActor` message loop is written *once* and reused for each entity type.
///
/// The associated `Id` type keeps lookups type safe: a `ProductId` cannot be used to
/// query an actor that serves some other entity.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., u32, a newtype, Uuid).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Returns this entity's identifier. Must be stable for the entity's lifetime.
    fn id(&self) -> Self::Id;

    /// Checks the entity's own invariants before it is admitted into a store.
    ///
    /// Returns a human readable reason on failure.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
