use crate::{
    abstract_trait::cart::repository::CartCommandRepositoryTrait,
    model::cart::{Cart as CartModel, CartItem as CartItemModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const CART_ITEM_RETURNING: &str =
    "RETURNING cart_item_id, cart_id, variant_id, quantity, created_at, updated_at";

pub struct CartCommandRepository {
    db: ConnectionPool,
}

impl CartCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for CartCommandRepository {
    async fn get_or_create_cart(&self, user_id: i32) -> Result<CartModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // the no-op update makes RETURNING yield the existing row as well
        sqlx::query_as::<_, CartModel>(
            r#"
            INSERT INTO carts (user_id, created_at, updated_at)
            VALUES ($1, current_timestamp, current_timestamp)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING cart_id, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to get or create cart for user {}: {:?}", user_id, err);
            RepositoryError::from_constraint(err)
        })
    }

    async fn add_item(
        &self,
        cart_id: i32,
        variant_id: i32,
        quantity: i32,
    ) -> Result<CartItemModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "INSERT INTO cart_items (cart_id, variant_id, quantity, created_at, updated_at) \
             VALUES ($1, $2, $3, current_timestamp, current_timestamp) \
             ON CONFLICT (cart_id, variant_id) DO UPDATE \
             SET quantity = cart_items.quantity + EXCLUDED.quantity, \
                 updated_at = current_timestamp \
             {CART_ITEM_RETURNING}"
        );

        let item = sqlx::query_as::<_, CartItemModel>(&sql)
            .bind(cart_id)
            .bind(variant_id)
            .bind(quantity)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to add variant {} to cart {}: {:?}",
                    variant_id, cart_id, err
                );
                RepositoryError::from_constraint(err)
            })?;

        info!(
            "🛒 Cart {} now holds {} x variant {}",
            cart_id, item.quantity, variant_id
        );
        Ok(item)
    }

    async fn remove_item(&self, cart_id: i32, cart_item_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM cart_items WHERE cart_item_id = $1 AND cart_id = $2")
            .bind(cart_item_id)
            .bind(cart_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to remove item {} from cart {}: {:?}",
                    cart_item_id, cart_id, err
                );
                RepositoryError::from(err)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_item_quantity(
        &self,
        cart_id: i32,
        variant_id: i32,
        quantity: i32,
    ) -> Result<Option<CartItemModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "UPDATE cart_items \
             SET quantity = $3, updated_at = current_timestamp \
             WHERE cart_id = $1 AND variant_id = $2 \
             {CART_ITEM_RETURNING}"
        );

        sqlx::query_as::<_, CartItemModel>(&sql)
            .bind(cart_id)
            .bind(variant_id)
            .bind(quantity)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to set quantity of variant {} in cart {}: {:?}",
                    variant_id, cart_id, err
                );
                RepositoryError::from(err)
            })
    }
}
