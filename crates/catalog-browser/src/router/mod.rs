//! # Navigation Router
//!
//! Maps client-side paths to the two catalog views.
//!
//! | Path pattern | Target |
//! |---|---|
//! | `/products` | list view |
//! | `/products/{id}` | detail view |
//! | `/` | redirect → `/products` |
//! | anything else | redirect → `/products` |
//!
//! ## Structure
//!
//! - [`routes`] - [`RouteTable`], [`RouteState`] and typed [`Destination`]s
//! - [`actor`] - the [`Router`] task that owns the current route and switches views
//! - [`navigator`] - the cloneable [`Navigator`] handle used to ask for navigation
//!
//! The router is an actor like the store: it handles one navigation at a time, so the
//! last navigation wins. Activating a view only *starts* its lookup; the lookup runs in
//! its own task so a slow store never holds up the next navigation.

pub mod actor;
pub mod navigator;
pub mod routes;

pub use actor::*;
pub use navigator::*;
pub use routes::*;

use thiserror::Error;

/// Default mailbox capacity of the router.
pub const DEFAULT_BUFFER: usize = 16;

/// Errors returned by navigation requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The router has shut down.
    #[error("Router closed")]
    RouterClosed,

    /// The router dropped the reply without answering.
    #[error("Router dropped response channel")]
    RouterDropped,

    /// No entry in the table matched, not even a catch-all.
    #[error("No route for {0}")]
    NoRoute(String),

    /// Redirects kept pointing at each other.
    #[error("Redirect loop starting at {0}")]
    RedirectLoop(String),
}
