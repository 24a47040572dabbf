//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 目录中保存的产品记录，不包含图片地址
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// 接口返回的产品结构
///
/// `imageUrl` 只用于展示：列表接口每次读取时重新生成，其余接口返回空串。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    pub fn new(id: i64, name: &str, description: &str, price: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }
}

impl ProductRecord {
    pub fn undecorated(product: &Product) -> Self {
        Self::decorated(product, String::new())
    }

    pub fn decorated(product: &Product, image_url: String) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image_url,
        }
    }

    /// 去掉图片地址后的目录记录
    pub fn product(&self) -> Product {
        Product {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

/// 出厂数据，重置时恢复到这里
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Product 1", "description 1", 100.0),
        Product::new(2, "Product 2", "description 2", 200.0),
        Product::new(3, "Product 3", "description 3", 300.0),
        Product::new(4, "Product 4", "description 4", 150.0),
        Product::new(5, "Product 5", "description 5", 500.0),
        Product::new(6, "Product 6", "description 6", 50.0),
    ]
}
