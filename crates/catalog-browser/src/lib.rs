//! # Catalog Browser Library
//!
//! A small product catalog browser built from actors:
//!
//! - **[store]**: the catalog, served by a generic [`ResourceActor`](resource_actor::ResourceActor)
//! - **[clients]**: [`CatalogClient`](clients::CatalogClient), the typed query API over the store
//! - **[router]**: path resolution, redirects and the [`Router`](router::Router) actor
//! - **[views]**: the list and detail controllers and the product card
//! - **[lifecycle]**: [`CatalogApp`](lifecycle::CatalogApp), which wires and runs everything
//!
//! [`config`] loads settings and an optional custom catalog from TOML, and [`render`]
//! turns view state into text for the command-line shell.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod render;
pub mod router;
pub mod store;
pub mod views;
