//! Client half of the router.

use super::{Destination, NavigationError, RouteState};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

/// Messages understood by the [`Router`](super::Router).
#[derive(Debug)]
pub enum NavigationRequest {
    Navigate {
        path: String,
        respond_to: oneshot::Sender<Result<RouteState, NavigationError>>,
    },
    /// Stops the router. Needed because views hold navigators of their own, so the
    /// router's mailbox never closes by itself.
    Shutdown,
}

/// Cloneable handle for asking the router to navigate.
#[derive(Clone)]
pub struct Navigator {
    sender: mpsc::Sender<NavigationRequest>,
    current: watch::Receiver<Option<RouteState>>,
}

impl Navigator {
    pub fn new(
        sender: mpsc::Sender<NavigationRequest>,
        current: watch::Receiver<Option<RouteState>>,
    ) -> Self {
        Self { sender, current }
    }

    /// Navigates to `path` and returns the resolved route.
    ///
    /// The reply arrives once the target view has been activated. Its data may still be
    /// loading.
    #[instrument(skip(self))]
    pub async fn navigate_to(&self, path: &str) -> Result<RouteState, NavigationError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NavigationRequest::Navigate {
                path: path.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| NavigationError::RouterClosed)?;
        response.await.map_err(|_| NavigationError::RouterDropped)?
    }

    /// Navigates to a typed destination.
    pub async fn navigate(&self, destination: Destination) -> Result<RouteState, NavigationError> {
        self.navigate_to(&destination.path()).await
    }

    /// The route of the last completed navigation, if any.
    pub fn current_route(&self) -> Option<RouteState> {
        self.current.borrow().clone()
    }

    /// A receiver that observes every route change.
    pub fn route_changes(&self) -> watch::Receiver<Option<RouteState>> {
        self.current.clone()
    }

    /// Asks the router to stop. A router that already stopped is not an error.
    pub async fn shutdown(&self) {
        let _ = self.sender.send(NavigationRequest::Shutdown).await;
    }

    /// Resolves once the router has stopped.
    pub async fn closed(&self) {
        self.sender.closed().await
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
