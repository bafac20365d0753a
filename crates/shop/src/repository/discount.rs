use crate::{
    abstract_trait::discount::DiscountQueryRepositoryTrait,
    model::discount::Discount as DiscountModel,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct DiscountQueryRepository {
    db: ConnectionPool,
}

impl DiscountQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiscountQueryRepositoryTrait for DiscountQueryRepository {
    async fn find_active(
        &self,
        code: &str,
        today: NaiveDate,
    ) -> Result<Option<DiscountModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, DiscountModel>(
            r#"
            SELECT discount_id, code, discount_percent, discount_money, start_date, end_date,
                   created_at, updated_at
            FROM discounts
            WHERE code = $1 AND start_date <= $2 AND end_date >= $2
            "#,
        )
        .bind(code)
        .bind(today)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to look up discount '{}': {:?}", code, err);
            RepositoryError::from(err)
        })?;

        if let Some(discount) = &result {
            info!("🏷️ Discount '{}' active on {}", discount.code, today);
        }

        Ok(result)
    }
}
