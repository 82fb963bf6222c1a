//! # Catalog Browser
//!
//! Command-line shell over [`CatalogApp`]: navigates to each given path in turn and prints
//! what the active view shows once it has settled.
//!
//! ```text
//! catalog-browser                       # the product list
//! catalog-browser /products/2 /nowhere  # a detail page, then a redirect to the list
//! catalog-browser --select 3            # open the list and pick the third product's card
//! ```
//!
//! Set `RUST_LOG=info` to follow the actors.

use catalog_browser::config::CatalogConfig;
use catalog_browser::lifecycle::CatalogApp;
use catalog_browser::model::ProductId;
use catalog_browser::render;
use catalog_browser::router::{Destination, RouteState, View};
use clap::Parser;
use resource_actor::tracing::setup_tracing;
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "catalog-browser", version, about = "Browse a product catalog")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// After the paths, open the list and select the card of this product
    #[arg(short, long, value_name = "ID")]
    select: Option<u32>,

    /// Paths to visit, in order
    #[arg(default_value = "/products")]
    paths: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    let app = CatalogApp::with_config(&config)?;

    for path in &args.paths {
        let span = tracing::info_span!("visit", %path);
        let route = app.navigator.navigate_to(path).instrument(span).await?;
        println!("{}\n", show(&app, &route).await);
    }

    if let Some(id) = args.select {
        select(&app, ProductId(id)).await?;
    }

    app.shutdown().await?;
    info!("Done");
    Ok(())
}

async fn show(app: &CatalogApp, route: &RouteState) -> String {
    let mut out = match &route.redirected_from {
        Some(from) => format!("{} (redirected from {})\n\n", route.path, from),
        None => format!("{}\n\n", route.path),
    };
    match route.view {
        View::ProductList => {
            let state = app.list_view.settled().await;
            out.push_str(&render::list(&state, &app.list_view.cards()));
        }
        View::ProductDetail => {
            let state = app.detail_view.settled().await;
            out.push_str(&render::detail(&state));
        }
    }
    out
}

async fn select(app: &CatalogApp, id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    app.navigator.navigate(Destination::ProductList).await?;
    app.list_view.settled().await;

    let Some(card) = app.list_view.cards().into_iter().find(|c| c.product().id == id) else {
        println!("No card for product {id}");
        return Ok(());
    };

    let mut changes = app.navigator.route_changes();
    card.activate();

    let target = Destination::ProductDetail(id).path();
    let route = changes
        .wait_for(|route| route.as_ref().is_some_and(|r| r.path == target))
        .await?
        .clone();
    if let Some(route) = route {
        println!("{}", show(app, &route).await);
    }
    Ok(())
}
