//! # 产品目录
//!
//! 内存中的产品目录 REST 服务与配套的终端客户端：
//! - `app`：产品模型、目录服务与 HTTP 处理器
//! - `core`：错误处理、响应结构、中间件与配置
//! - `infrastructure`：日志与图片地址生成
//! - `client`：HTTP 客户端、展示状态与渲染

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;

pub use app::build_router;
pub use app::product::handler::AppState;
pub use app::product::service::{Catalog, CatalogService};
