//! # View Controllers
//!
//! The controllers behind the two routes, plus the card presenter the list composes.
//!
//! - [`list`] - [`ListView`]: `Idle → Loading → Loaded(products)`
//! - [`detail`] - [`DetailView`]: `Idle → Resolving(id) → Found(product) | NotFound`
//! - [`card`] - [`ProductCard`]: shows one product, emits its id when activated
//!
//! Both controllers can also end in `Failed` when the store is unreachable.
//!
//! ## Activations and stale results
//!
//! Every activation has a generation number. `begin()` bumps it and moves the view into
//! its loading state synchronously; the returned load/lookup then talks to the store and
//! applies its result only if its generation is still current. A newer activation, or a
//! `deactivate()`, therefore silently wins over any reply still on its way, no matter
//! how late that reply arrives.
//!
//! State is published on a `tokio::sync::watch` channel. The presentation layer can read
//! it (`state()`, `products()`, `product()`), follow it (`subscribe()`), or wait for the
//! current activation to finish (`settled()`).

pub mod card;
pub mod detail;
pub mod list;

pub use card::*;
pub use detail::*;
pub use list::*;
