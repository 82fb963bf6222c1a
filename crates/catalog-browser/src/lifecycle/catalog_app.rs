use crate::clients::CatalogClient;
use crate::config::CatalogConfig;
use crate::router::{Navigator, RouteTable, Router, Views};
use crate::store::{self, CatalogError};
use crate::views::{DetailView, ListView};
use tracing::{error, info};

/// The composition root of the catalog browser.
///
/// `CatalogApp` is responsible for:
/// - **Construction**: building the store exactly once from the configured seed
/// - **Wiring**: handing each controller its own client handle (no global lookup)
/// - **Lifecycle**: spawning the store, the router and the selection forwarder, and
///   stopping them again
///
/// # Example
///
/// ```rust
/// use catalog_browser::lifecycle::CatalogApp;
/// use catalog_browser::views::DetailState;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app = CatalogApp::new()?;
///
///     app.navigator.navigate_to("/products/2").await?;
///     match app.detail_view.settled().await {
///         DetailState::Found(product) => assert_eq!(product.name, "Phone X"),
///         other => panic!("unexpected {other:?}"),
///     }
///
///     app.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CatalogApp {
    /// Handle for navigating between views.
    pub navigator: Navigator,

    /// Client for querying the store directly.
    pub catalog: CatalogClient,

    /// Controller behind `/products`.
    pub list_view: ListView,

    /// Controller behind `/products/{id}`.
    pub detail_view: DetailView,

    /// Task handles for the store, the router and the forwarder.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogApp {
    /// Starts the application with the default configuration and catalog.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_config(&CatalogConfig::default())
    }

    /// Starts the application.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidSeed`] if the configured catalog is rejected by the store.
    pub fn with_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        // 1. Create the actors (no dependencies yet)
        let (store_actor, store_client) = store::new(config.store_buffer, config.catalog())?;
        let (router, navigator) = Router::new(config.router_buffer, RouteTable::catalog());

        // 2. Build the controllers, each with its own handles
        let catalog = CatalogClient::new(store_client);
        let (list_view, forwarder) = ListView::new(catalog.clone(), navigator.clone());
        let detail_view = DetailView::new(catalog.clone());

        // 3. Start everything; the router gets its views injected at run time
        let store_handle = tokio::spawn(store_actor.run());
        let router_handle = tokio::spawn(router.run(Views {
            list: list_view.clone(),
            detail: detail_view.clone(),
        }));
        let forwarder_handle = tokio::spawn(forwarder.run());

        info!("Catalog browser started");
        Ok(Self {
            navigator,
            catalog,
            list_view,
            detail_view,
            handles: vec![router_handle, forwarder_handle, store_handle],
        })
    }

    /// Gracefully shuts down the application.
    ///
    /// 1. Stops the router, which releases its views
    /// 2. Drops this app's handles, which closes the store's mailbox
    /// 3. Waits for every task to finish
    ///
    /// Clones of the views or of the catalog client kept elsewhere keep the store alive,
    /// so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog browser...");

        self.navigator.shutdown().await;
        drop(self.navigator);
        drop(self.list_view);
        drop(self.detail_view);
        drop(self.catalog);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(format!("Task failed: {:?}", e));
            }
        }

        info!("Catalog browser shutdown complete.");
        Ok(())
    }
}
