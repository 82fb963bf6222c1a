//! List view controller.

use super::card::{ProductCard, SelectionReceiver, SelectionSender};
use crate::clients::CatalogClient;
use crate::model::{Product, ProductId};
use crate::router::{Destination, NavigationError, Navigator, RouteState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// What the list view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// Not active.
    Idle,
    /// Waiting for the catalog.
    Loading,
    /// The catalog, in order. May be empty.
    Loaded(Vec<Product>),
    /// The store could not be reached. The view can be activated again to retry.
    Failed(String),
}

impl ListState {
    /// Anything but `Loading`.
    pub fn is_settled(&self) -> bool {
        !matches!(self, ListState::Loading)
    }
}

/// Controller for `/products`.
///
/// Cheap to clone; clones share state. State is published through a `watch` channel so
/// the presentation layer can follow it.
#[derive(Clone)]
pub struct ListView {
    inner: Arc<ListInner>,
}

struct ListInner {
    catalog: CatalogClient,
    navigator: Navigator,
    selections: SelectionSender,
    state: watch::Sender<ListState>,
    // Only changed while the `state` lock is held.
    generation: AtomicU64,
}

impl ListView {
    /// Creates the controller and the forwarder that turns card selections into
    /// navigation. The forwarder must be spawned for cards to have any effect.
    pub fn new(catalog: CatalogClient, navigator: Navigator) -> (Self, SelectionForwarder) {
        let (selections, receiver) = mpsc::unbounded_channel();
        let (state, _) = watch::channel(ListState::Idle);
        let view = Self {
            inner: Arc::new(ListInner {
                catalog,
                navigator: navigator.clone(),
                selections,
                state,
                generation: AtomicU64::new(0),
            }),
        };
        let forwarder = SelectionForwarder {
            navigator,
            selections: receiver,
        };
        (view, forwarder)
    }

    /// Enters `Loading` and returns the pending load for this activation.
    ///
    /// Any earlier load still in flight becomes stale.
    pub fn begin(&self) -> ListLoad {
        let mut generation = 0;
        self.inner.state.send_modify(|state| {
            generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ListState::Loading;
        });
        info!(generation, "List view activated");
        ListLoad {
            view: self.clone(),
            generation,
        }
    }

    /// Activates the view and waits for its load to finish.
    pub async fn activate(&self) {
        self.begin().resolve().await
    }

    /// Returns to `Idle`. A load still in flight will be discarded.
    pub fn deactivate(&self) {
        self.inner.state.send_modify(|state| {
            self.inner.generation.fetch_add(1, Ordering::SeqCst);
            *state = ListState::Idle;
        });
        debug!("List view deactivated");
    }

    fn apply(&self, generation: u64, next: ListState) -> bool {
        self.inner.state.send_if_modified(|state| {
            if self.inner.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        })
    }

    pub fn state(&self) -> ListState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.inner.state.subscribe()
    }

    /// Waits until the current activation has settled and returns the state.
    pub async fn settled(&self) -> ListState {
        let mut receiver = self.subscribe();
        let state = match receiver.wait_for(ListState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }

    /// The loaded products, in order. Empty unless `Loaded`.
    pub fn products(&self) -> Vec<Product> {
        match &*self.inner.state.borrow() {
            ListState::Loaded(products) => products.clone(),
            _ => Vec::new(),
        }
    }

    /// One card per loaded product, wired to this view's selection channel.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.products()
            .into_iter()
            .map(|product| ProductCard::new(product, self.inner.selections.clone()))
            .collect()
    }

    /// Navigates to the detail view of `id`.
    pub async fn on_product_selected(&self, id: ProductId) -> Result<RouteState, NavigationError> {
        select_product(&self.inner.navigator, id).await
    }
}

/// A list load started by [`ListView::begin`].
#[must_use = "a load does nothing unless resolved"]
pub struct ListLoad {
    view: ListView,
    generation: u64,
}

impl ListLoad {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Fetches the catalog and applies it, unless a newer activation has taken over.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub async fn resolve(self) {
        let next = match self.view.inner.catalog.list_products().await {
            Ok(products) => ListState::Loaded(products),
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                ListState::Failed(e.to_string())
            }
        };

        let size = match &next {
            ListState::Loaded(products) => products.len(),
            _ => 0,
        };
        if self.view.apply(self.generation, next) {
            info!(size, "List view loaded");
        } else {
            debug!("Discarding stale catalog load");
        }
    }
}

/// Drains card selections and turns each into a navigation to the detail view.
///
/// Stops when every card and the view have been dropped, or when the router stops.
pub struct SelectionForwarder {
    navigator: Navigator,
    selections: SelectionReceiver,
}

impl SelectionForwarder {
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                selected = self.selections.recv() => {
                    let Some(id) = selected else { break };
                    if let Err(e) = select_product(&self.navigator, id).await {
                        warn!(%id, error = %e, "Selection not handled");
                        if e == NavigationError::RouterClosed {
                            break;
                        }
                    }
                }
                _ = self.navigator.closed() => break,
            }
        }
        debug!("Selection forwarder stopped");
    }
}

async fn select_product(navigator: &Navigator, id: ProductId) -> Result<RouteState, NavigationError> {
    info!(%id, "Product selected");
    navigator.navigate(Destination::ProductDetail(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_catalog;
    use crate::router::{NavigationRequest, RouteTable, Router, View};
    use resource_actor::mock::{create_mock_client, expect_list, MockClient};
    use resource_actor::FrameworkError;

    fn detached_navigator() -> Navigator {
        let (_router, navigator) = Router::new(4, RouteTable::catalog());
        navigator
    }

    #[tokio::test]
    async fn test_activation_loads_catalog_in_order() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(default_catalog());
        let (view, _) = ListView::new(CatalogClient::new(mock.client()), detached_navigator());

        assert_eq!(view.state(), ListState::Idle);
        view.activate().await;

        let ids: Vec<u32> = view.products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(view.cards().len(), 3);
        mock.verify();
    }

    #[tokio::test]
    async fn test_empty_catalog_is_loaded_not_failed() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(Vec::new());
        let (view, _) = ListView::new(CatalogClient::new(mock.client()), detached_navigator());

        view.activate().await;
        assert_eq!(view.state(), ListState::Loaded(Vec::new()));
        assert!(view.cards().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_failed_state() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_err(FrameworkError::ActorDropped);
        let (view, _) = ListView::new(CatalogClient::new(mock.client()), detached_navigator());

        view.activate().await;
        assert!(matches!(view.state(), ListState::Failed(_)));
        assert!(view.products().is_empty());
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let (view, _) = ListView::new(CatalogClient::new(client), detached_navigator());

        let first_load = view.begin();
        let first_generation = first_load.generation();
        let first = tokio::spawn(first_load.resolve());
        let first_responder = expect_list(&mut receiver).await.unwrap();

        let second_load = view.begin();
        assert!(second_load.generation() > first_generation);
        let second = tokio::spawn(second_load.resolve());
        let second_responder = expect_list(&mut receiver).await.unwrap();

        second_responder.send(Ok(default_catalog())).unwrap();
        second.await.unwrap();
        assert_eq!(view.products().len(), 3);

        // The superseded activation answers last and must not win.
        first_responder.send(Ok(Vec::new())).unwrap();
        first.await.unwrap();
        assert_eq!(view.products().len(), 3);
    }

    #[tokio::test]
    async fn test_deactivation_discards_pending_load() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let (view, _) = ListView::new(CatalogClient::new(client), detached_navigator());

        let pending = tokio::spawn(view.begin().resolve());
        let responder = expect_list(&mut receiver).await.unwrap();
        assert_eq!(view.state(), ListState::Loading);

        view.deactivate();
        responder.send(Ok(default_catalog())).unwrap();
        pending.await.unwrap();

        assert_eq!(view.state(), ListState::Idle);
    }

    #[tokio::test]
    async fn test_selection_asks_router_for_detail_path() {
        let (sender, mut requests) = mpsc::channel(4);
        let (_current, observer) = watch::channel(None);
        let navigator = Navigator::new(sender, observer);

        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(default_catalog());
        let (view, forwarder) = ListView::new(CatalogClient::new(mock.client()), navigator);
        tokio::spawn(forwarder.run());
        view.activate().await;

        let card = view.cards().into_iter().nth(1).unwrap();
        assert!(card.activate());

        match requests.recv().await {
            Some(NavigationRequest::Navigate { path, .. }) => assert_eq!(path, "/products/2"),
            other => panic!("Expected Navigate, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_on_product_selected_navigates_to_detail() {
        let (sender, mut requests) = mpsc::channel(4);
        let (_current, observer) = watch::channel(None);
        let navigator = Navigator::new(sender, observer);

        let mock = MockClient::<Product>::new();
        let (view, _) = ListView::new(CatalogClient::new(mock.client()), navigator);

        let selection = tokio::spawn(async move { view.on_product_selected(ProductId(2)).await });

        match requests.recv().await {
            Some(NavigationRequest::Navigate { path, respond_to }) => {
                assert_eq!(path, "/products/2");
                respond_to.send(RouteTable::catalog().resolve(&path)).unwrap();
            }
            other => panic!("Expected Navigate, got {:?}", other),
        }

        let route = selection.await.unwrap().expect("Navigation failed");
        assert_eq!(route.view, View::ProductDetail);
        assert_eq!(route.params.get("id"), Some("2"));
        mock.verify();
    }
}
