use crate::{
    abstract_trait::variant::VariantQueryRepositoryTrait, model::variant::Variant as VariantModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::PgExecutor;
use tracing::{error, info, warn};

pub(crate) const VARIANT_COLUMNS: &str = r#"
    v.variant_id, v.product_id, p.name AS product_name, v.sku, v.memory, v.color,
    v.quantity, v.price, v.compare_at_price, v.img, v.created_at, v.updated_at
"#;

pub struct VariantQueryRepository {
    db: ConnectionPool,
}

impl VariantQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VariantQueryRepositoryTrait for VariantQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<VariantModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {VARIANT_COLUMNS} FROM variants v \
             JOIN products p ON p.product_id = v.product_id \
             WHERE v.variant_id = $1"
        );

        let result = sqlx::query_as::<_, VariantModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch variant {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        Ok(result)
    }
}

/// Stock mutations. Always executed on the caller's transaction.
pub struct VariantCommandRepository;

impl VariantCommandRepository {
    /// Conditional decrement; `None` when the row holds less than `amount`.
    pub async fn decrement_stock<'e, E>(
        executor: E,
        variant_id: i32,
        amount: i32,
    ) -> Result<Option<i32>, RepositoryError>
    where
        E: PgExecutor<'e>,
    {
        let remaining = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE variants
            SET quantity   = quantity - $2,
                updated_at = current_timestamp
            WHERE variant_id = $1 AND quantity >= $2
            RETURNING quantity
            "#,
        )
        .bind(variant_id)
        .bind(amount)
        .fetch_optional(executor)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to decrement stock of variant {} by {}: {:?}",
                variant_id, amount, err
            );
            RepositoryError::from(err)
        })?;

        match remaining {
            Some(left) => info!("📦 Variant {variant_id} stock now {left}"),
            None => warn!("⚠️ Variant {variant_id} has less than {amount} in stock"),
        }

        Ok(remaining)
    }
}
