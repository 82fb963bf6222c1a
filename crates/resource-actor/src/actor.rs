//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns an immutable,
//! ordered collection of entities and answers queries about it. It implements the
//! "Server" side of the Actor Model, processing messages sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that serves a read-only collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the collection (`items`) and
/// the receiver end of the channel. The collection is built once in [`ResourceActor::new`]
/// and never changes afterwards, so the actor's only job is answering `List` and `Get`.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in one Tokio task. Nothing outside
/// the task can reach `items`, so there is no `Mutex` or `RwLock` anywhere.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` with the seed to get the `actor` and `client`.
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client freely; each clone talks to the same actor.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Colour { id: u32, name: String }
///
/// impl ActorEntity for Colour {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let seed = vec![Colour { id: 1, name: "red".into() }];
///     let (actor, client) = ResourceActor::new(10, seed).unwrap();
///     tokio::spawn(actor.run());
///
///     let red = client.get(1).await.unwrap();
///     assert_eq!(red.unwrap().name, "red");
///     assert!(client.get(2).await.unwrap().is_none());
/// }
/// ```
///
/// # Implementation Details
///
/// The actor keeps the entities in a `Vec` (insertion order is the listing order) plus a
/// `HashMap` from ID to position, so `Get` is O(1).
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    items: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` serving `seed`, and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `seed` - The complete collection, in the order `List` will return it.
    ///
    /// # Errors
    ///
    /// [`FrameworkError::InvalidEntity`] if an entity fails [`ActorEntity::validate`], and
    /// [`FrameworkError::DuplicateId`] if two entities share an ID.
    pub fn new(buffer_size: usize, seed: Vec<T>) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let mut index = HashMap::with_capacity(seed.len());
        for (position, item) in seed.iter().enumerate() {
            let id = item.id();
            item.validate()
                .map_err(|reason| FrameworkError::InvalidEntity { id: id.to_string(), reason })?;
            if index.insert(id.clone(), position).is_some() {
                return Err(FrameworkError::DuplicateId(id.to_string()));
            }
        }

        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: seed,
            index,
        };
        let client = ResourceClient::new(sender);
        Ok((actor, client))
    }

    /// Number of entities the actor serves.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "catalog_browser::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.items.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.items.len(), "List");
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.index.get(&id).map(|&position| self.items[position].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(entity_type, size = self.items.len(), "Shutdown");
    }
}
