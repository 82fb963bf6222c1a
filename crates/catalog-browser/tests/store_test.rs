use catalog_browser::clients::CatalogClient;
use catalog_browser::config::CatalogConfig;
use catalog_browser::lifecycle::CatalogApp;
use catalog_browser::model::{default_catalog, Product, ProductId};
use catalog_browser::store::{self, CatalogError};
use resource_actor::tracing::try_setup_tracing;
use resource_actor::ActorClient;

fn spawn_store(seed: Vec<Product>) -> CatalogClient {
    try_setup_tracing();
    let (actor, client) = store::new(store::DEFAULT_BUFFER, seed).expect("Seed rejected");
    tokio::spawn(actor.run());
    CatalogClient::new(client)
}

#[tokio::test]
async fn test_every_seeded_product_can_be_found() {
    let client = spawn_store(default_catalog());

    for product in default_catalog() {
        let found = client
            .find_product_by_id(product.id)
            .await
            .expect("Store unavailable");
        assert_eq!(found, Some(product));
    }

    assert_eq!(
        client.find_product_by_id(ProductId(9999)).await,
        Ok(None)
    );
}

#[tokio::test]
async fn test_list_preserves_seed_order() {
    let client = spawn_store(default_catalog());

    let ids: Vec<ProductId> = client
        .list_products()
        .await
        .expect("Store unavailable")
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![ProductId(1), ProductId(2), ProductId(3)]);

    // The generic trait methods answer the same queries
    assert_eq!(client.list().await.expect("Store unavailable").len(), 3);
    assert!(client.get(ProductId(3)).await.expect("Store unavailable").is_some());
}

#[tokio::test]
async fn test_empty_store() {
    let client = spawn_store(Vec::new());

    assert_eq!(client.list_products().await, Ok(Vec::new()));
    assert_eq!(client.find_product_by_id(ProductId(1)).await, Ok(None));
}

#[tokio::test]
async fn test_concurrent_queries() {
    let client = spawn_store(default_catalog());

    let mut handles = Vec::new();
    for i in 0..20u32 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let id = ProductId(i % 4 + 1);
            client.find_product_by_id(id).await
        }));
    }

    let mut found = 0;
    for handle in handles {
        if handle.await.expect("Task panicked").expect("Store unavailable").is_some() {
            found += 1;
        }
    }
    // ids 1..=3 exist, id 4 does not
    assert_eq!(found, 15);
}

#[tokio::test]
async fn test_invalid_seed_is_rejected() {
    let duplicate = vec![
        Product::new(1, "A", 1.0, ""),
        Product::new(1, "B", 2.0, ""),
    ];
    assert!(matches!(
        store::new(4, duplicate),
        Err(CatalogError::InvalidSeed(_))
    ));

    let negative = vec![Product::new(1, "A", -1.0, "")];
    assert!(matches!(
        store::new(4, negative),
        Err(CatalogError::InvalidSeed(_))
    ));
}

#[tokio::test]
async fn test_stopped_store_is_unavailable() {
    let (actor, client) = store::new(4, default_catalog()).expect("Seed rejected");
    let client = CatalogClient::new(client);
    drop(actor);

    assert!(matches!(
        client.list_products().await,
        Err(CatalogError::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_app_serves_configured_catalog() {
    let config = CatalogConfig::from_toml_str(
        r#"
        [[products]]
        id = 7
        name = "Lamp"
        price = 15.0
        "#,
    )
    .expect("Invalid config");
    let app = CatalogApp::with_config(&config).expect("Failed to start app");

    let products = app.catalog.list_products().await.expect("Store unavailable");
    assert_eq!(products, vec![Product::new(7, "Lamp", 15.0, "")]);
    assert_eq!(app.catalog.find_product_by_id(ProductId(1)).await, Ok(None));

    app.shutdown().await.expect("Shutdown failed");
}
