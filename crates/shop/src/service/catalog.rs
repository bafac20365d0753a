use crate::{
    abstract_trait::{
        cache::DynCatalogCache,
        catalog::{CatalogQueryServiceTrait, DynCatalogQueryRepository},
        variant::DynVariantQueryRepository,
    },
    domain::response::{
        api::ApiResponse,
        catalog::{ProductResponse, VariantResponse},
    },
    model::{
        product::{Product as ProductModel, ProductImage as ProductImageModel},
        variant::Variant as VariantModel,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracing},
};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Clone)]
pub struct CatalogQueryService {
    query: DynCatalogQueryRepository,
    variant_query: DynVariantQueryRepository,
    cache: DynCatalogCache,
    tracing: ServiceTracing,
}

pub struct CatalogQueryServiceDeps {
    pub query: DynCatalogQueryRepository,
    pub variant_query: DynVariantQueryRepository,
    pub cache: DynCatalogCache,
}

impl CatalogQueryService {
    pub fn new(deps: CatalogQueryServiceDeps, registry: &mut Registry) -> Self {
        let CatalogQueryServiceDeps {
            query,
            variant_query,
            cache,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "catalog_query_service", "CatalogQueryService");

        Self {
            query,
            variant_query,
            cache,
            tracing: ServiceTracing::new("catalog-query-service", metrics),
        }
    }

    async fn assemble(
        &self,
        products: Vec<ProductModel>,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let ids: Vec<i32> = products.iter().map(|p| p.product_id).collect();

        let mut images: HashMap<i32, Vec<ProductImageModel>> = HashMap::new();
        for image in self.query.find_images_by_products(&ids).await? {
            images.entry(image.product_id).or_default().push(image);
        }

        let mut variants: HashMap<i32, Vec<VariantModel>> = HashMap::new();
        for variant in self.query.find_variants_by_products(&ids).await? {
            variants.entry(variant.product_id).or_default().push(variant);
        }

        Ok(products
            .into_iter()
            .map(|product| {
                let id = product.product_id;
                ProductResponse::assemble(
                    product,
                    images.remove(&id).unwrap_or_default(),
                    variants.remove(&id).unwrap_or_default(),
                )
            })
            .collect())
    }

    async fn load_products(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        if let Some(cached) = self.cache.get_products().await {
            debug!("Product list served from cache");
            return Ok(cached);
        }

        let products = self.query.find_products().await?;
        let products = self.assemble(products).await?;

        self.cache.set_products(&products).await;
        Ok(products)
    }

    async fn load_product(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        if let Some(cached) = self.cache.get_product(id).await {
            debug!("Product {id} served from cache");
            return Ok(cached);
        }

        let product = self
            .query
            .find_product_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".into()))?;

        let product = self
            .assemble(vec![product])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::NotFound("Product not found".into()))?;

        self.cache.set_product(&product).await;
        Ok(product)
    }
}

#[async_trait]
impl CatalogQueryServiceTrait for CatalogQueryService {
    async fn find_products(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracing.start(
            "find_products",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_products"),
            ],
        );

        match self.load_products().await {
            Ok(products) => {
                info!("✅ Returning {} products", products.len());
                self.tracing
                    .success(&tracing_ctx, method, "Products retrieved successfully");
                Ok(ApiResponse::success("Products retrieved successfully", products))
            }
            Err(e) => {
                self.tracing.failure(&tracing_ctx, method, &e.to_string());
                Err(e)
            }
        }
    }

    async fn find_product(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracing.start(
            "find_product",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.load_product(id).await {
            Ok(product) => {
                self.tracing
                    .success(&tracing_ctx, method, "Product retrieved successfully");
                Ok(ApiResponse::success("Product retrieved successfully", product))
            }
            Err(e) => {
                self.tracing.failure(&tracing_ctx, method, &e.to_string());
                Err(e)
            }
        }
    }

    async fn find_variant(&self, id: i32) -> Result<ApiResponse<VariantResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracing.start(
            "find_variant",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_variant"),
                KeyValue::new("variant.id", id.to_string()),
            ],
        );

        let result = match self.variant_query.find_by_id(id).await {
            Ok(Some(variant)) => Ok(VariantResponse::from(variant)),
            Ok(None) => Err(ServiceError::NotFound("Variant not found".into())),
            Err(e) => Err(ServiceError::Repo(e)),
        };

        match result {
            Ok(variant) => {
                self.tracing
                    .success(&tracing_ctx, method, "Variant retrieved successfully");
                Ok(ApiResponse::success("Variant retrieved successfully", variant))
            }
            Err(e) => {
                self.tracing.failure(&tracing_ctx, method, &e.to_string());
                Err(e)
            }
        }
    }
}
