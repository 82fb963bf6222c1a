//! Pure data structures implementing the [`ActorEntity`](resource_actor::ActorEntity) trait.

pub mod product;
pub mod seed;

pub use product::*;
pub use seed::*;
