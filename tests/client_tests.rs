use product_catalog::{
    build_router,
    client::{render::render, CatalogApi, ClientError, HttpCatalogClient, ProductListView},
    core::config::CorsConfig,
    AppState, CatalogService,
};
use tokio::net::TcpListener;

/// 在随机端口上启动服务，返回基础地址
async fn spawn_server() -> String {
    let app = build_router(
        AppState::new(CatalogService::default()),
        &CorsConfig::default(),
    )
    .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", address)
}

/// 绑定后立即释放的端口，连接会被拒绝
async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}

#[tokio::test]
async fn test_http_client_round_trip() {
    let client = HttpCatalogClient::new(spawn_server().await);

    let listed = client.list_products().await.unwrap();
    assert!(listed.success);
    assert_eq!(listed.data.unwrap().len(), 6);

    let deleted = client.delete_product(2).await.unwrap();
    assert_eq!(deleted.message.as_deref(), Some("Product deleted"));
    assert_eq!(deleted.data.unwrap().name, "Product 2");

    match client.delete_product(2).await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("expected 404, got {:?}", other),
    }

    let reset = client.reset_products().await.unwrap();
    assert_eq!(reset.data.unwrap().len(), 6);
}

#[tokio::test]
async fn test_view_against_live_server() {
    let mut view = ProductListView::new(HttpCatalogClient::new(spawn_server().await));
    view.mount().await;
    assert_eq!(view.products().len(), 6);

    for id in 1..=6 {
        assert!(view.request_delete(id));
        view.confirm_delete().await;
    }
    assert!(view.is_empty_state());
    assert!(render(&view).contains("No Products Available"));

    view.restore().await;
    assert!(view.error().is_none());
    let ids: Vec<i64> = view.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert!(view.products().iter().all(|p| !p.image_url.is_empty()));
}

#[tokio::test]
async fn test_stale_delete_surfaces_banner() {
    let base_url = spawn_server().await;
    let mut view = ProductListView::new(HttpCatalogClient::new(base_url.clone()));
    view.mount().await;

    // 另一个客户端先删除了同一个产品
    HttpCatalogClient::new(base_url).delete_product(4).await.unwrap();

    view.request_delete(4);
    view.confirm_delete().await;

    let banner = view.error().unwrap();
    assert!(banner.starts_with("Error deleting product: "));
    assert!(banner.contains("404"));
    assert!(!view.delete_dialog().open);
}

#[tokio::test]
async fn test_unreachable_server_shows_error_banner() {
    let mut view = ProductListView::new(HttpCatalogClient::new(closed_port_url().await));
    view.mount().await;

    assert!(!view.is_loading());
    assert!(view.products().is_empty());
    let banner = view.error().unwrap().to_string();
    assert!(banner.starts_with("Error connecting to server: "));
    assert!(banner.len() > "Error connecting to server: ".len());
    assert!(render(&view).contains(&banner));
}
