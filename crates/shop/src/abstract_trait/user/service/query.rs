use crate::domain::response::{api::ApiResponse, user::UserResponse};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_by_id(
        &self,
        current_user: i32,
        id: i32,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
