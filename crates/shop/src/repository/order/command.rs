use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    domain::requests::order::CreateOrderRecordRequest,
    model::order::{
        Order as OrderModel, OrderDetail as OrderDetailModel, OrderDetailStatus, PlacedOrder,
    },
    repository::variant::VariantCommandRepository,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn place_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<Option<PlacedOrder>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let remaining_stock =
            match VariantCommandRepository::decrement_stock(&mut *tx, req.variant_id, req.quantity)
                .await?
            {
                Some(left) => left,
                None => {
                    tx.rollback().await.map_err(RepositoryError::from)?;
                    warn!(
                        "⚠️ Placement for user {} rolled back: variant {} out of stock",
                        req.user_id, req.variant_id
                    );
                    return Ok(None);
                }
            };

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (user_id, discount_id, note, ship_address, ship_date, payment,
                                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp, current_timestamp)
            RETURNING order_id, user_id, discount_id, note, ship_address, ship_date, payment,
                      created_at, updated_at
            "#,
        )
        .bind(req.user_id)
        .bind(req.discount_id)
        .bind(&req.note)
        .bind(&req.ship_address)
        .bind(req.ship_date)
        .bind(&req.payment)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for user {}: {:?}",
                req.user_id, err
            );
            RepositoryError::from_constraint(err)
        })?;

        let detail = sqlx::query_as::<_, OrderDetailModel>(
            r#"
            INSERT INTO order_details (order_id, variant_id, quantity, price, status,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING order_detail_id, order_id, variant_id, quantity, price, status,
                      created_at, updated_at
            "#,
        )
        .bind(order.order_id)
        .bind(req.variant_id)
        .bind(req.quantity)
        .bind(req.price)
        .bind(OrderDetailStatus::Pending.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create detail for order {}: {:?}",
                order.order_id, err
            );
            RepositoryError::from_constraint(err)
        })?;

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit order {}: {:?}", order.order_id, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order ID {} for user {} ({} left in stock)",
            order.order_id, order.user_id, remaining_stock
        );

        Ok(Some(PlacedOrder {
            order,
            detail,
            remaining_stock,
        }))
    }

    async fn update_detail_status(
        &self,
        order_detail_id: i32,
        status: &str,
    ) -> Result<OrderDetailModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let detail = sqlx::query_as::<_, OrderDetailModel>(
            r#"
            UPDATE order_details
            SET status     = $2,
                updated_at = current_timestamp
            WHERE order_detail_id = $1
            RETURNING order_detail_id, order_id, variant_id, quantity, price, status,
                      created_at, updated_at
            "#,
        )
        .bind(order_detail_id)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update status of order detail {}: {:?}",
                order_detail_id, err
            );
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Order detail {} is now {}", order_detail_id, detail.status);
        Ok(detail)
    }
}
