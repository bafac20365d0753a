use crate::domain::response::catalog::ProductResponse;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCatalogCache = Arc<dyn CatalogCacheTrait + Send + Sync>;

/// Product read cache. Misses and backend failures both return `None`.
#[async_trait]
pub trait CatalogCacheTrait {
    async fn get_products(&self) -> Option<Vec<ProductResponse>>;
    async fn set_products(&self, products: &[ProductResponse]);
    async fn get_product(&self, id: i32) -> Option<ProductResponse>;
    async fn set_product(&self, product: &ProductResponse);
    async fn invalidate_product(&self, id: i32);
}
