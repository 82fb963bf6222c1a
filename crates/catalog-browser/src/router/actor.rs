//! Server half of the router.

use super::{NavigationRequest, Navigator, RouteState, RouteTable, View};
use crate::views::{DetailView, ListView};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The view controllers the router switches between.
///
/// Injected into [`Router::run`] rather than [`Router::new`], because the list view
/// needs a [`Navigator`] that only exists once the router has been created.
#[derive(Clone)]
pub struct Views {
    pub list: ListView,
    pub detail: DetailView,
}

/// Actor that owns the current route.
///
/// Each navigation:
/// 1. resolves the path against the [`RouteTable`] (following redirects),
/// 2. deactivates the current view, discarding its state and any lookup in flight,
/// 3. starts the target view's activation and spawns its lookup,
/// 4. publishes the new [`RouteState`] and replies with it.
///
/// A path that cannot be resolved leaves the current view untouched.
pub struct Router {
    receiver: mpsc::Receiver<NavigationRequest>,
    table: RouteTable,
    current: watch::Sender<Option<RouteState>>,
}

impl Router {
    /// Creates the router and its [`Navigator`] handle.
    pub fn new(buffer_size: usize, table: RouteTable) -> (Self, Navigator) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (current, observer) = watch::channel(None);
        let router = Self {
            receiver,
            table,
            current,
        };
        (router, Navigator::new(sender, observer))
    }

    /// Runs the navigation loop until a `Shutdown` request arrives or every navigator
    /// is dropped.
    pub async fn run(mut self, views: Views) {
        info!("Router started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                NavigationRequest::Navigate { path, respond_to } => {
                    debug!(%path, "Navigate");
                    let result = self.table.resolve(&path);
                    match &result {
                        Ok(state) => self.switch(&views, state),
                        Err(e) => warn!(%path, error = %e, "Navigation failed"),
                    }
                    let _ = respond_to.send(result);
                }
                NavigationRequest::Shutdown => break,
            }
        }

        if let Some(state) = self.current.borrow().as_ref() {
            views.deactivate(state.view);
        }
        info!("Router shutdown");
    }

    fn switch(&self, views: &Views, state: &RouteState) {
        if let Some(previous) = self.current.borrow().as_ref() {
            views.deactivate(previous.view);
        }

        match state.view {
            View::ProductList => {
                let load = views.list.begin();
                tokio::spawn(load.resolve());
            }
            View::ProductDetail => {
                if let Some(lookup) = views.detail.begin(&state.params) {
                    tokio::spawn(lookup.resolve());
                }
            }
        }

        info!(
            path = %state.path,
            view = ?state.view,
            redirected_from = state.redirected_from.as_deref().unwrap_or(""),
            "Navigated"
        );
        self.current.send_replace(Some(state.clone()));
    }
}

impl Views {
    fn deactivate(&self, view: View) {
        match view {
            View::ProductList => self.list.deactivate(),
            View::ProductDetail => self.detail.deactivate(),
        }
    }
}
