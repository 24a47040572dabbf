//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// 核心错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// 目标资源不存在 (404)
    NotFound(String),
    /// 处理过程中的意外失败 (500)
    Internal { message: String, error: String },
}

impl CoreError {
    pub fn internal(message: impl Into<String>, error: impl ToString) -> Self {
        CoreError::Internal {
            message: message.into(),
            error: error.to_string(),
        }
    }

    /// 替换 500 错误的用户提示，保留底层错误信息
    pub fn with_message(self, message: &str) -> Self {
        match self {
            CoreError::Internal { error, .. } => CoreError::Internal {
                message: message.to_string(),
                error,
            },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::NotFound(msg) => write!(f, "{}", msg),
            CoreError::Internal { message, error } => write!(f, "{}: {}", message, error),
        }
    }
}

impl std::error::Error for CoreError {}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, error) = match self {
            CoreError::NotFound(msg) => (msg, None),
            CoreError::Internal { message, error } => {
                tracing::error!(%message, %error, "请求处理失败");
                (message, Some(error))
            }
        };

        let error_response = ErrorResponse {
            success: false,
            message,
            error,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}
