//! 产品列表的展示状态
//!
//! 只保存瞬时 UI 状态：产品列表、加载标记、最近一次错误与删除确认框。
//! 所有动作都以 `&mut self` 调用，同一个视图上不会出现并发的请求。

use tracing::{error, info};

use super::api::CatalogApi;
use crate::app::product::model::ProductRecord;

/// 删除确认框状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteDialog {
    pub open: bool,
    pub product_id: Option<i64>,
    pub product_name: String,
}

impl DeleteDialog {
    fn opened(product: &ProductRecord) -> Self {
        Self {
            open: true,
            product_id: Some(product.id),
            product_name: product.name.clone(),
        }
    }
}

pub struct ProductListView<A> {
    api: A,
    products: Vec<ProductRecord>,
    loading: bool,
    error: Option<String>,
    delete_dialog: DeleteDialog,
}

impl<A: CatalogApi> ProductListView<A> {
    /// 新视图处于加载状态，直到第一次 `mount` 完成
    pub fn new(api: A) -> Self {
        Self {
            api,
            products: Vec::new(),
            loading: true,
            error: None,
            delete_dialog: DeleteDialog::default(),
        }
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn delete_dialog(&self) -> &DeleteDialog {
        &self.delete_dialog
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// 全部产品被删除后显示恢复入口
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.products.is_empty()
    }

    pub async fn mount(&mut self) {
        self.fetch_products().await;
    }

    pub async fn fetch_products(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.list_products().await {
            Ok(envelope) if envelope.success => {
                self.products = envelope.data.unwrap_or_default();
            }
            Ok(_) => self.error = Some("Failed to fetch products".to_string()),
            Err(e) => {
                error!(error = %e, "获取产品列表失败");
                self.error = Some(format!("Error connecting to server: {}", e));
            }
        }

        self.loading = false;
    }

    /// 打开确认框，不发请求；id 不在当前列表中时返回 false
    pub fn request_delete(&mut self, product_id: i64) -> bool {
        match self.products.iter().find(|p| p.id == product_id) {
            Some(product) => {
                self.delete_dialog = DeleteDialog::opened(product);
                true
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog = DeleteDialog::default();
    }

    /// 确认删除；无论成功与否都会关闭确认框
    pub async fn confirm_delete(&mut self) {
        let dialog = std::mem::take(&mut self.delete_dialog);
        let Some(product_id) = dialog.product_id else {
            return;
        };

        match self.api.delete_product(product_id).await {
            Ok(envelope) if envelope.success => {
                info!(product_id, "产品已删除");
                self.products.retain(|p| p.id != product_id);
            }
            Ok(_) => self.error = Some("Failed to delete product".to_string()),
            Err(e) => {
                error!(product_id, error = %e, "删除产品失败");
                self.error = Some(format!("Error deleting product: {}", e));
            }
        }
    }

    /// 重置后总是重新拉取列表，不直接使用重置接口的返回值
    pub async fn restore(&mut self) {
        self.loading = true;

        match self.api.reset_products().await {
            Ok(envelope) if envelope.success => {
                self.fetch_products().await;
            }
            Ok(_) => {
                self.error = Some("Failed to reset products".to_string());
                self.loading = false;
            }
            Err(e) => {
                error!(error = %e, "重置产品失败");
                self.error = Some(format!("Error resetting products: {}", e));
                self.loading = false;
            }
        }
    }
}
