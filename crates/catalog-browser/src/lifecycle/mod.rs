//! # Application Lifecycle
//!
//! Starting, wiring and stopping the pieces of the catalog browser.
//!
//! ## Wiring
//!
//! ```text
//! CatalogConfig ──► store actor ──► CatalogClient ─┬─► ListView ──┐
//!                                                  └─► DetailView ┴─► Router::run(Views)
//!                   Router::new ──► Navigator ─────────► ListView, SelectionForwarder
//! ```
//!
//! The list view needs a [`Navigator`](crate::router::Navigator) and the router needs
//! the list view. As with any late-bound dependency, the cycle is broken by creating the
//! router first and injecting the views into `run()` rather than `new()`.
//!
//! ## Shutdown
//!
//! Because of that cycle, the router's mailbox never closes by itself, so it is stopped
//! with an explicit `Shutdown` request. Once it exits it drops its views; the forwarder
//! notices the closed router and stops; the store stops when the last catalog client is
//! gone.

pub mod catalog_app;

pub use catalog_app::*;
