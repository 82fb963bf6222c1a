//! Detail view controller.

use crate::clients::CatalogClient;
use crate::model::{Product, ProductId};
use crate::router::RouteParams;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Name of the route parameter carrying the product id.
pub const ID_PARAM: &str = "id";

/// What the detail view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Not active.
    Idle,
    /// Waiting for the product with this id.
    Resolving(ProductId),
    Found(Product),
    /// No such product, or the id parameter was missing or not a number.
    NotFound,
    /// The store could not be reached. The view can be activated again to retry.
    Failed(String),
}

impl DetailState {
    /// Anything but `Resolving`.
    pub fn is_settled(&self) -> bool {
        !matches!(self, DetailState::Resolving(_))
    }
}

/// Controller for `/products/{id}`.
#[derive(Clone)]
pub struct DetailView {
    inner: Arc<DetailInner>,
}

struct DetailInner {
    catalog: CatalogClient,
    state: watch::Sender<DetailState>,
    // Only changed while the `state` lock is held.
    generation: AtomicU64,
}

impl DetailView {
    pub fn new(catalog: CatalogClient) -> Self {
        let (state, _) = watch::channel(DetailState::Idle);
        Self {
            inner: Arc::new(DetailInner {
                catalog,
                state,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Starts an activation from the route parameters.
    ///
    /// A missing or non-numeric `id` settles straight into `NotFound` and returns `None`.
    /// Otherwise the view enters `Resolving` and the returned lookup must be resolved.
    /// Either way, any earlier lookup still in flight becomes stale.
    pub fn begin(&self, params: &RouteParams) -> Option<DetailLookup> {
        let raw = params.get(ID_PARAM);
        let id = raw.and_then(|raw| raw.parse::<ProductId>().ok());

        let mut generation = 0;
        self.inner.state.send_modify(|state| {
            generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = match id {
                Some(id) => DetailState::Resolving(id),
                None => DetailState::NotFound,
            };
        });

        match id {
            Some(id) => {
                info!(%id, generation, "Detail view activated");
                Some(DetailLookup {
                    view: self.clone(),
                    generation,
                    id,
                })
            }
            None => {
                info!(id = raw.unwrap_or(""), generation, "Detail view activated with unusable id");
                None
            }
        }
    }

    /// Activates the view and waits for its lookup to finish.
    pub async fn activate(&self, params: &RouteParams) {
        if let Some(lookup) = self.begin(params) {
            lookup.resolve().await;
        }
    }

    /// Returns to `Idle`. A lookup still in flight will be discarded.
    pub fn deactivate(&self) {
        self.inner.state.send_modify(|state| {
            self.inner.generation.fetch_add(1, Ordering::SeqCst);
            *state = DetailState::Idle;
        });
        debug!("Detail view deactivated");
    }

    fn apply(&self, generation: u64, next: DetailState) -> bool {
        self.inner.state.send_if_modified(|state| {
            if self.inner.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        })
    }

    pub fn state(&self) -> DetailState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.inner.state.subscribe()
    }

    /// Waits until the current activation has settled and returns the state.
    pub async fn settled(&self) -> DetailState {
        let mut receiver = self.subscribe();
        let state = match receiver.wait_for(DetailState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }

    /// The product on display, if one was found.
    pub fn product(&self) -> Option<Product> {
        match &*self.inner.state.borrow() {
            DetailState::Found(product) => Some(product.clone()),
            _ => None,
        }
    }
}

/// A product lookup started by [`DetailView::begin`].
#[must_use = "a lookup does nothing unless resolved"]
pub struct DetailLookup {
    view: DetailView,
    generation: u64,
    id: ProductId,
}

impl DetailLookup {
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Looks the product up and applies the result, unless a newer activation has
    /// taken over.
    #[instrument(skip(self), fields(id = %self.id, generation = self.generation))]
    pub async fn resolve(self) {
        let next = match self.view.inner.catalog.find_product_by_id(self.id).await {
            Ok(Some(product)) => DetailState::Found(product),
            Ok(None) => DetailState::NotFound,
            Err(e) => {
                warn!(error = %e, "Product lookup failed");
                DetailState::Failed(e.to_string())
            }
        };

        let found = matches!(next, DetailState::Found(_));
        if self.view.apply(self.generation, next) {
            info!(found, "Detail view resolved");
        } else {
            debug!("Discarding stale product lookup");
        }
    }
}
