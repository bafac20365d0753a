use crate::domain::{
    requests::order::PlaceOrderRequest,
    response::{api::ApiResponse, order::OrderResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn place_order(
        &self,
        user_id: i32,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
