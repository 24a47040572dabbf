//! 核心响应处理模块

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API 响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_missing_message() {
        let value = serde_json::to_value(ApiResponse::success(vec![1, 2, 3])).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
        assert!(value.get("message").is_none());
        assert!(Uuid::parse_str(value["request_id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn message_is_serialized_when_present() {
        let value = serde_json::to_value(ApiResponse::success(()).with_message("Product deleted")).unwrap();
        assert_eq!(value["message"], "Product deleted");
    }
}
