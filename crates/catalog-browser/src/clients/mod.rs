//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod catalog_client;

pub use catalog_client::*;
