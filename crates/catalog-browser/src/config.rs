//! Application configuration, loaded from TOML.
//!
//! ```toml
//! store_buffer = 32
//! router_buffer = 16
//!
//! [[products]]
//! id = 1
//! name = "Desk"
//! price = 120.0
//! description = "Oak, two drawers"
//! ```
//!
//! Every key is optional. Without `[[products]]` the default catalog is used.

use crate::model::{default_catalog, Product, ProductId};
use resource_actor::ActorEntity;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0} must be greater than zero")]
    ZeroBuffer(&'static str),

    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: ProductId, reason: String },

    #[error("Duplicate product id {0}")]
    DuplicateId(ProductId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Mailbox capacity of the store actor.
    pub store_buffer: usize,
    /// Mailbox capacity of the router.
    pub router_buffer: usize,
    /// Replaces the default catalog when present. May be empty.
    pub products: Option<Vec<Product>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store_buffer: crate::store::DEFAULT_BUFFER,
            router_buffer: crate::router::DEFAULT_BUFFER,
            products: None,
        }
    }
}

impl CatalogConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer == 0 {
            return Err(ConfigError::ZeroBuffer("store_buffer"));
        }
        if self.router_buffer == 0 {
            return Err(ConfigError::ZeroBuffer("router_buffer"));
        }

        let mut seen = HashSet::new();
        for product in self.products.iter().flatten() {
            product.validate().map_err(|reason| ConfigError::InvalidProduct {
                id: product.id,
                reason,
            })?;
            if !seen.insert(product.id) {
                return Err(ConfigError::DuplicateId(product.id));
            }
        }
        Ok(())
    }

    /// The catalog the store should serve.
    pub fn catalog(&self) -> Vec<Product> {
        self.products.clone().unwrap_or_else(default_catalog)
    }
}
