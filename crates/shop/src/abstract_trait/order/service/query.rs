use crate::domain::{
    requests::order::CheckOrderRequest,
    response::{api::ApiResponse, order::OrderResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn my_orders(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn check_order(
        &self,
        req: &CheckOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
