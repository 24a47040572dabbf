//! 产品目录业务服务

use std::sync::{Arc, Mutex, MutexGuard};

use super::model::{seed_products, Product, ProductRecord};
use crate::core::error::CoreError;
use crate::infrastructure::image::ImageUrlGenerator;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// 进程内的产品目录
///
/// `original` 在创建后不再修改；`current` 始终是 `original` 的有序子集，
/// 直到下一次重置。
#[derive(Debug, Clone)]
pub struct Catalog {
    original: Vec<Product>,
    current: Vec<Product>,
}

impl Catalog {
    pub fn new(original: Vec<Product>) -> Self {
        let current = original.clone();
        Self { original, current }
    }

    pub fn products(&self) -> &[Product] {
        &self.current
    }

    pub fn original(&self) -> &[Product] {
        &self.original
    }

    /// 删除第一个匹配的产品；不存在时不改变目录
    pub fn delete_by_id(&mut self, id: i64) -> Option<Product> {
        let index = self.current.iter().position(|p| p.id == id)?;
        Some(self.current.remove(index))
    }

    /// 用出厂数据整体替换当前目录
    pub fn reset(&mut self) -> &[Product] {
        self.current = self.original.clone();
        &self.current
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(seed_products())
    }
}

#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Mutex<Catalog>>,
    images: ImageUrlGenerator,
}

impl CatalogService {
    pub fn new(catalog: Catalog, images: ImageUrlGenerator) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            images,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Catalog>, CoreError> {
        self.catalog
            .lock()
            .map_err(|e| CoreError::internal("Catalog unavailable", e))
    }

    /// 当前目录快照，每个产品附带新生成的图片地址
    pub fn list(&self) -> Result<Vec<ProductRecord>, CoreError> {
        let catalog = self.lock()?;
        Ok(catalog
            .products()
            .iter()
            .map(|p| ProductRecord::decorated(p, self.images.generate()))
            .collect())
    }

    pub fn delete_by_id(&self, id: i64) -> Result<ProductRecord, CoreError> {
        let mut catalog = self.lock()?;
        catalog
            .delete_by_id(id)
            .map(|p| ProductRecord::undecorated(&p))
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }

    pub fn reset(&self) -> Result<Vec<ProductRecord>, CoreError> {
        let mut catalog = self.lock()?;
        Ok(catalog
            .reset()
            .iter()
            .map(ProductRecord::undecorated)
            .collect())
    }

    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.lock()?.products().len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(Catalog::default(), ImageUrlGenerator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[ProductRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn list_decorates_every_product() {
        let service = CatalogService::default();
        let products = service.list().unwrap();

        assert_eq!(products.len(), 6);
        for product in &products {
            assert!(product
                .image_url
                .starts_with("https://picsum.photos/200/200?random="));
        }
    }

    #[test]
    fn list_does_not_persist_image_urls() {
        let service = CatalogService::default();
        service.list().unwrap();

        let reset = service.reset().unwrap();
        assert!(reset.iter().all(|p| p.image_url.is_empty()));
    }

    #[test]
    fn image_urls_vary_between_reads() {
        let service = CatalogService::default();
        let first: Vec<String> = service.list().unwrap().into_iter().map(|p| p.image_url).collect();
        let second: Vec<String> = service.list().unwrap().into_iter().map(|p| p.image_url).collect();
        // 6 个随机数在 [0, 1000) 内全部相同的概率可以忽略
        assert_ne!(first, second);
    }

    #[test]
    fn delete_removes_exactly_one_and_is_not_idempotent() {
        let service = CatalogService::default();

        let removed = service.delete_by_id(3).unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(removed.name, "Product 3");
        assert!(removed.image_url.is_empty());
        assert_eq!(ids(&service.list().unwrap()), vec![1, 2, 4, 5, 6]);

        let again = service.delete_by_id(3);
        assert_eq!(again, Err(CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())));
        assert_eq!(service.len().unwrap(), 5);
    }

    #[test]
    fn delete_unknown_id_leaves_catalog_unchanged() {
        let service = CatalogService::default();
        assert!(matches!(service.delete_by_id(999), Err(CoreError::NotFound(_))));
        assert_eq!(service.len().unwrap(), 6);
    }

    #[test]
    fn reset_restores_seed_and_is_idempotent() {
        let service = CatalogService::default();
        for id in [1, 4, 6] {
            service.delete_by_id(id).unwrap();
        }

        let first = service.reset().unwrap();
        let second = service.reset().unwrap();
        assert_eq!(first, second);

        let restored: Vec<Product> = service.list().unwrap().iter().map(|r| r.product()).collect();
        assert_eq!(restored, seed_products());
    }

    #[test]
    fn emptied_catalog_can_be_restored() {
        let service = CatalogService::default();
        for id in 1..=6 {
            service.delete_by_id(id).unwrap();
        }
        assert!(service.is_empty().unwrap());
        assert!(service.list().unwrap().is_empty());

        assert_eq!(ids(&service.reset().unwrap()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn catalog_keeps_original_relative_order() {
        let mut catalog = Catalog::default();
        catalog.delete_by_id(2);
        catalog.delete_by_id(5);

        let remaining: Vec<i64> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![1, 3, 4, 6]);
        assert_eq!(catalog.original().len(), 6);
    }

    #[test]
    fn concurrent_deletes_of_same_id_succeed_once() {
        let service = CatalogService::default();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                std::thread::spawn(move || service.delete_by_id(2).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(service.len().unwrap(), 5);
    }
}
