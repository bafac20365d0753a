use crate::{
    abstract_trait::catalog::CatalogQueryRepositoryTrait,
    model::{
        product::{Product as ProductModel, ProductImage as ProductImageModel},
        variant::Variant as VariantModel,
    },
    repository::variant::VARIANT_COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const PRODUCT_SELECT: &str = r#"
    SELECT p.product_id, p.name, p.description, p.technical_specifications,
           p.brand_id, b.name AS brand_name, b.img AS brand_img,
           p.created_at, p.updated_at
    FROM products p
    LEFT JOIN brands b ON b.brand_id = p.brand_id
"#;

pub struct CatalogQueryRepository {
    db: ConnectionPool,
}

impl CatalogQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogQueryRepositoryTrait for CatalogQueryRepository {
    async fn find_products(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("{PRODUCT_SELECT} ORDER BY p.product_id");

        let products = sqlx::query_as::<_, ProductModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch products: {:?}", err);
                RepositoryError::from(err)
            })?;

        info!("✅ Loaded {} products", products.len());
        Ok(products)
    }

    async fn find_product_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("{PRODUCT_SELECT} WHERE p.product_id = $1");

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch product {}: {:?}", id, err);
                RepositoryError::from(err)
            })
    }

    async fn find_images_by_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<ProductImageModel>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, ProductImageModel>(
            r#"
            SELECT image_id, product_id, img
            FROM product_images
            WHERE product_id = ANY($1)
            ORDER BY image_id
            "#,
        )
        .bind(product_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product images: {:?}", err);
            RepositoryError::from(err)
        })
    }

    async fn find_variants_by_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<VariantModel>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {VARIANT_COLUMNS} FROM variants v \
             JOIN products p ON p.product_id = v.product_id \
             WHERE v.product_id = ANY($1) \
             ORDER BY v.variant_id"
        );

        sqlx::query_as::<_, VariantModel>(&sql)
            .bind(product_ids)
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch variants: {:?}", err);
                RepositoryError::from(err)
            })
    }
}
