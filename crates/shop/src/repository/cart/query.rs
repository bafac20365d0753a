use crate::{
    abstract_trait::cart::repository::CartQueryRepositoryTrait,
    model::cart::{Cart as CartModel, CartLine as CartLineModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

pub struct CartQueryRepository {
    db: ConnectionPool,
}

impl CartQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for CartQueryRepository {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<CartModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CartModel>(
            "SELECT cart_id, user_id, created_at, updated_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch cart of user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })
    }

    async fn find_lines(&self, cart_id: i32) -> Result<Vec<CartLineModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CartLineModel>(
            r#"
            SELECT ci.cart_item_id, ci.variant_id, v.sku, p.name AS product_name,
                   v.price, v.compare_at_price, ci.quantity
            FROM cart_items ci
            JOIN variants v ON v.variant_id = ci.variant_id
            JOIN products p ON p.product_id = v.product_id
            WHERE ci.cart_id = $1
            ORDER BY ci.cart_item_id
            "#,
        )
        .bind(cart_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch items of cart {}: {:?}", cart_id, err);
            RepositoryError::from(err)
        })
    }
}
