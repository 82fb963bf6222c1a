//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
///
/// Every request carries exactly one of these, so every answer is a single-value
/// asynchronous result regardless of how quickly the actor replies.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Read-Only Resources
/// The actor serves an immutable collection, so the vocabulary is limited to the two
/// queries such a collection supports:
///
/// - **List**: the whole collection, in insertion order.
/// - **Get**: one entity by ID, or `None` when no entity carries that ID.
///
/// This type is generic over `T: ActorEntity`, so a `Get` for one entity type can never
/// be sent to an actor serving another.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}
