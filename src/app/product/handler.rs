//! 产品目录处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::{info, warn};

use super::{
    model::ProductRecord,
    service::{CatalogService, PRODUCT_NOT_FOUND},
};
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
}

impl AppState {
    pub fn new(catalog_service: CatalogService) -> Self {
        Self { catalog_service }
    }
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProductRecord>>>, CoreError> {
    let products = state
        .catalog_service
        .list()
        .map_err(|e| e.with_message("Failed to fetch products"))?;
    Ok(Json(ApiResponse::success(products)))
}

/// DELETE /api/products/:id
///
/// 非整数的 id 不可能匹配任何产品，按不存在处理。
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<ProductRecord>>, CoreError> {
    let Ok(id) = raw_id.trim().parse::<i64>() else {
        warn!(id = %raw_id, "无法解析的产品 id");
        return Err(CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    };

    let removed = state
        .catalog_service
        .delete_by_id(id)
        .map_err(|e| e.with_message("Failed to delete product"))?;

    info!(product_id = removed.id, "产品已删除");
    Ok(Json(ApiResponse::success(removed).with_message("Product deleted")))
}

/// DELETE /api/products/reset
///
/// `reset` 不是产品 id，与其它无法解析的 id 一样返回 404。
pub async fn delete_reset_path() -> CoreError {
    CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())
}

/// POST /api/products/reset
pub async fn reset_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProductRecord>>>, CoreError> {
    let products = state
        .catalog_service
        .reset()
        .map_err(|e| e.with_message("Failed to reset products"))?;

    info!(count = products.len(), "产品目录已重置");
    Ok(Json(
        ApiResponse::success(products).with_message("Products reset successfully"),
    ))
}

/// GET /health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    let count = state.catalog_service.len()?;
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "products": count,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
