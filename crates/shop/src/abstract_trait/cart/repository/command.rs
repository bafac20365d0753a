use crate::model::cart::{Cart as CartModel, CartItem as CartItemModel};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCartCommandRepository = Arc<dyn CartCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartCommandRepositoryTrait {
    async fn get_or_create_cart(&self, user_id: i32) -> Result<CartModel, RepositoryError>;
    /// Inserts the item or increments the existing one by `quantity`.
    async fn add_item(
        &self,
        cart_id: i32,
        variant_id: i32,
        quantity: i32,
    ) -> Result<CartItemModel, RepositoryError>;
    /// `false` when no item with that id exists in the cart.
    async fn remove_item(&self, cart_id: i32, cart_item_id: i32) -> Result<bool, RepositoryError>;
    async fn set_item_quantity(
        &self,
        cart_id: i32,
        variant_id: i32,
        quantity: i32,
    ) -> Result<Option<CartItemModel>, RepositoryError>;
}
