use crate::model::cart::{Cart as CartModel, CartLine as CartLineModel};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<CartModel>, RepositoryError>;
    async fn find_lines(&self, cart_id: i32) -> Result<Vec<CartLineModel>, RepositoryError>;
}
