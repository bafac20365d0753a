use super::ORDER_COLUMNS;
use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    model::order::{Order as OrderModel, OrderDetail as OrderDetailModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders o \
             WHERE o.user_id = $1 \
             ORDER BY o.created_at DESC, o.order_id DESC"
        );

        let orders = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch orders of user {}: {:?}", user_id, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Found {} orders for user {}", orders.len(), user_id);
        Ok(orders)
    }

    async fn find_by_id_and_phone(
        &self,
        order_id: i32,
        phone_number: &str,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders o \
             JOIN users u ON u.user_id = o.user_id \
             WHERE o.order_id = $1 AND u.phone_number = $2"
        );

        sqlx::query_as::<_, OrderModel>(&sql)
            .bind(order_id)
            .bind(phone_number)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to look up order {}: {:?}", order_id, err);
                RepositoryError::from(err)
            })
    }

    async fn find_details_by_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderDetailModel>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderDetailModel>(
            r#"
            SELECT order_detail_id, order_id, variant_id, quantity, price, status,
                   created_at, updated_at
            FROM order_details
            WHERE order_id = ANY($1)
            ORDER BY order_detail_id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order details: {:?}", err);
            RepositoryError::from(err)
        })
    }
}
