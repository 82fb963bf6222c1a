//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate
//! for any binary built on this framework.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The output uses the compact
//! format and hides the crate/module prefix (`with_target(false)`); actors identify
//! themselves through the `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with collection size) and shutdown
//! - **Queries**: every `List` and `Get`, with the ID and whether it was found (`debug`)
//! - **Client calls**: an instrumented span per `ActorClient` method
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle only
//! RUST_LOG=debug cargo run    # every query
//! ```
//!
//! ```text
//! INFO Actor started entity_type="Product" size=3
//! DEBUG get{id=ProductId(2)}: Sending request
//! DEBUG Get entity_type="Product" id=2 found=true
//! ```

/// Installs the global subscriber. Call once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but tolerates a subscriber already being installed.
///
/// Handy in tests, where several test functions may try to install one.
pub fn try_setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init()
        .is_ok()
}
