use crate::model::order::{Order as OrderModel, OrderDetail as OrderDetailModel};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_by_id_and_phone(
        &self,
        order_id: i32,
        phone_number: &str,
    ) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_details_by_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderDetailModel>, RepositoryError>;
}
