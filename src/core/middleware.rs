//! 核心中间件模块

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::info;
use uuid::Uuid;

use super::config::{ConfigError, CorsConfig};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    info!(
        %request_id,
        %method,
        %uri,
        status = status.as_u16(),
        duration_ms = duration.as_millis() as u64,
        user_agent = ?user_agent,
        "请求完成"
    );

    response
}

/// 只允许单个来源的跨域配置，允许携带凭据
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(&config.allowed_origin)
        .map_err(|e| ConfigError::Validation(format!("无效的跨域来源 {}: {}", config.allowed_origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(config.allow_credentials)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
