use crate::{
    domain::response::{
        api::ApiResponse,
        catalog::{ProductResponse, VariantResponse},
    },
    model::{
        product::{Product as ProductModel, ProductImage as ProductImageModel},
        variant::Variant as VariantModel,
    },
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynCatalogQueryRepository = Arc<dyn CatalogQueryRepositoryTrait + Send + Sync>;
pub type DynCatalogQueryService = Arc<dyn CatalogQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CatalogQueryRepositoryTrait {
    async fn find_products(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_product_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    async fn find_images_by_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<ProductImageModel>, RepositoryError>;
    async fn find_variants_by_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<VariantModel>, RepositoryError>;
}

#[async_trait]
pub trait CatalogQueryServiceTrait {
    async fn find_products(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_product(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn find_variant(&self, id: i32) -> Result<ApiResponse<VariantResponse>, ServiceError>;
}
