//! # Catalog Store
//!
//! The product catalog is served by a generic
//! [`ResourceActor`](resource_actor::ResourceActor) over [`Product`] records.
//!
//! ## Structure
//!
//! - [`error`] - [`CatalogError`] type for store failures
//! - [`new()`] - Factory function that validates the seed and creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_browser::clients::CatalogClient;
//! use catalog_browser::model::{default_catalog, ProductId};
//! use catalog_browser::store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = store::new(store::DEFAULT_BUFFER, default_catalog())?;
//!     let client = CatalogClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     assert_eq!(client.list_products().await?.len(), 3);
//!     assert!(client.find_product_by_id(ProductId(9999)).await?.is_none());
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Default mailbox capacity of the store actor.
pub const DEFAULT_BUFFER: usize = 32;

/// Creates a new catalog store actor serving `seed`, and its client.
pub fn new(
    buffer_size: usize,
    seed: Vec<Product>,
) -> Result<(ResourceActor<Product>, ResourceClient<Product>), CatalogError> {
    ResourceActor::new(buffer_size, seed).map_err(|e| CatalogError::InvalidSeed(e.to_string()))
}
