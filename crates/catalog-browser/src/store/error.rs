//! Error types for the catalog store.

use thiserror::Error;

/// Errors that can occur while starting or querying the catalog store.
///
/// A product that does not exist is **not** an error; lookups report it as `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The seed was rejected before the store started (duplicate or invalid record).
    #[error("Invalid catalog seed: {0}")]
    InvalidSeed(String),

    /// The store could not be reached or did not answer.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}
