use crate::{
    abstract_trait::cache::CatalogCacheTrait, domain::response::catalog::ProductResponse,
};
use async_trait::async_trait;
use chrono::Duration;
use shared::cache::CacheStore;
use std::sync::Arc;

const PRODUCTS_KEY: &str = "catalog:products";

fn product_key(id: i32) -> String {
    format!("catalog:product:{id}")
}

pub struct CatalogCache {
    store: Arc<CacheStore>,
    ttl: Duration,
}

impl CatalogCache {
    pub fn new(store: Arc<CacheStore>) -> Self {
        Self {
            store,
            ttl: Duration::minutes(5),
        }
    }
}

#[async_trait]
impl CatalogCacheTrait for CatalogCache {
    async fn get_products(&self) -> Option<Vec<ProductResponse>> {
        self.store.get_from_cache(PRODUCTS_KEY).await
    }

    async fn set_products(&self, products: &[ProductResponse]) {
        self.store
            .set_to_cache(PRODUCTS_KEY, &products, self.ttl)
            .await;
    }

    async fn get_product(&self, id: i32) -> Option<ProductResponse> {
        self.store.get_from_cache(&product_key(id)).await
    }

    async fn set_product(&self, product: &ProductResponse) {
        self.store
            .set_to_cache(&product_key(product.id), product, self.ttl)
            .await;
    }

    async fn invalidate_product(&self, id: i32) {
        self.store.delete_from_cache(PRODUCTS_KEY).await;
        self.store.delete_from_cache(&product_key(id)).await;
    }
}
