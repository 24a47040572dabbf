//! 产品目录客户端：HTTP 访问、展示状态与终端渲染

pub mod api;
pub mod render;
pub mod view;

pub use api::{ApiEnvelope, CatalogApi, ClientError, HttpCatalogClient};
pub use view::{DeleteDialog, ProductListView};
