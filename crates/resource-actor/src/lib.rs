//! # Resource Actor
//!
//! This crate provides the building blocks for serving an immutable collection of
//! entities from an actor. It follows the **Actor Model**: one Tokio task owns the data,
//! and every consumer talks to it through a cheap, cloneable client handle.
//!
//! ## Consumer contract
//!
//! - Every query is a request message with a one-shot reply, so every answer is a
//!   **single-value asynchronous result**.
//! - Transport failures (`ActorClosed`, `ActorDropped`) are typed separately from "not
//!   found", which is simply `Ok(None)`.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain type and its ID
//! 2. **Runtime Layer** ([`ResourceActor`]) - Owns the collection, answers queries
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct City { id: u16, name: &'static str }
//!
//! impl ActorEntity for City {
//!     type Id = u16;
//!     fn id(&self) -> u16 { self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let seed = vec![City { id: 1, name: "Oslo" }, City { id: 2, name: "Lima" }];
//!     let (actor, client) = ResourceActor::new(8, seed).unwrap();
//!     tokio::spawn(actor.run());
//!
//!     let names: Vec<_> = client.list().await.unwrap().iter().map(|c| c.name).collect();
//!     assert_eq!(names, ["Oslo", "Lima"]);
//!     assert!(client.get(3).await.unwrap().is_none());
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and handles messages sequentially
//! - The collection is fixed at construction, so no locks are needed anywhere
//! - The actor stops once every client clone has been dropped
//!
//! ## Testing
//!
//! The [`mock`] module provides a fluent `MockClient` and raw helpers for answering
//! requests by hand, in any order.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
