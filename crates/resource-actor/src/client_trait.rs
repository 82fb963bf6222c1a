//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `list` and
//! `get` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard queries.
///
/// A domain client wraps a `ResourceClient<T>`, picks its own error type and says how
/// framework errors map into it. `list` and `get` then come for free.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Shelf { id: u32 }
///
/// impl ActorEntity for Shelf {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("shelf store unavailable: {0}")]
/// struct ShelfError(String);
///
/// struct ShelfClient {
///     inner: ResourceClient<Shelf>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Shelf> for ShelfClient {
///     type Error = ShelfError;
///
///     fn inner(&self) -> &ResourceClient<Shelf> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ShelfError(e.to_string())
///     }
/// }
///
/// async fn usage(client: ShelfClient) {
///     // list() and get() are provided automatically!
///     let _ = client.list().await;
///     let _ = client.get(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
