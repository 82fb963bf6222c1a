//! # Catalog Client
//!
//! Provides a high‑level API for querying the catalog store.
//! It wraps a `ResourceClient<Product>` and exposes the two catalog queries.
use crate::model::{Product, ProductId};
use crate::store::CatalogError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for querying the catalog store.
///
/// Both queries are asynchronous even though the default store is in memory; callers
/// must not rely on them resolving before the first `.await`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// The full catalog, in insertion order. Empty only if the catalog is empty.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Listing products");
        self.list().await
    }

    /// The product with this id, or `None` if there is none.
    ///
    /// A missing product is a normal outcome, never an `Err`.
    #[instrument(skip(self))]
    pub async fn find_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        debug!(%id, "Looking up product");
        self.get(id).await
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::Unavailable(e.to_string())
    }
}
