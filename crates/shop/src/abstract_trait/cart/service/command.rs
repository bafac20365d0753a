use crate::domain::{
    requests::cart::{AddToCartRequest, RemoveFromCartRequest, UpdateCartQuantityRequest},
    response::{api::ApiResponse, cart::CartItemResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCartCommandService = Arc<dyn CartCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartCommandServiceTrait {
    async fn add_to_cart(
        &self,
        user_id: i32,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError>;
    async fn remove_from_cart(
        &self,
        user_id: i32,
        req: &RemoveFromCartRequest,
    ) -> Result<(), ServiceError>;
    async fn update_quantity(
        &self,
        user_id: i32,
        req: &UpdateCartQuantityRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError>;
}
