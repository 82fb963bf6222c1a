//! A product record in the catalog.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be served by a [`ResourceActor`](resource_actor::ResourceActor).
//! Records are created once, when the store starts, and only ever handed out as clones.

use resource_actor::ActorEntity;
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Type-safe identifier for Products. Also the routing key in `/products/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    /// Parses a route parameter as an unsigned decimal. A leading `+` and leading zeros
    /// are accepted, so `+2` and `02` both name product 2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, positive
    /// * `name` - Product name, non-empty
    /// * `price` - Product price, non-negative
    /// * `description` - Free text, may be empty
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

impl ActorEntity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.0 == 0 {
            return Err("id must be positive".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("price must be a non-negative amount, got {}", self.price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parameter_parsing() {
        assert_eq!("2".parse::<ProductId>(), Ok(ProductId(2)));
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
        assert!("2.5".parse::<ProductId>().is_err());
        assert_eq!("+2".parse::<ProductId>(), Ok(ProductId(2)));
        assert_eq!("02".parse::<ProductId>(), Ok(ProductId(2)));
    }

    #[test]
    fn test_validation() {
        assert!(Product::new(1, "Lamp", 0.0, "").validate().is_ok());
        assert!(Product::new(0, "Lamp", 1.0, "").validate().is_err());
        assert!(Product::new(1, "  ", 1.0, "").validate().is_err());
        assert!(Product::new(1, "Lamp", -0.01, "").validate().is_err());
        assert!(Product::new(1, "Lamp", f64::NAN, "").validate().is_err());
    }

    #[test]
    fn test_id_displays_as_path_segment() {
        assert_eq!(ProductId(42).to_string(), "42");
    }
}
