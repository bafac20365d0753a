use crate::domain::{
    requests::user::{RegisterUserRequest, UpdateUserRequest},
    response::{api::ApiResponse, user::UserResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn register(
        &self,
        req: &RegisterUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn update_user(
        &self,
        current_user: i32,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
