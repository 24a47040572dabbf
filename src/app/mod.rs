//! 应用层

pub mod product;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::core::{
    config::{ConfigError, CorsConfig},
    middleware::{cors_layer, request_logging_middleware},
};
use product::handler::{self, AppState};

/// 组装全部路由与中间件
pub fn build_router(state: AppState, cors: &CorsConfig) -> Result<Router, ConfigError> {
    let router = Router::new()
        .route("/api/products", get(handler::list_products))
        .route(
            "/api/products/reset",
            post(handler::reset_products).delete(handler::delete_reset_path),
        )
        .route("/api/products/:id", delete(handler::delete_product))
        .route("/health", get(handler::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors)?)
        .with_state(state);

    Ok(router)
}
