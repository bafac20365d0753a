use crate::domain::{
    requests::comment::{CreateCommentRequest, UpdateCommentRequest},
    response::{api::ApiResponse, comment::CommentResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCommentCommandService = Arc<dyn CommentCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CommentCommandServiceTrait {
    async fn create_comment(
        &self,
        user_id: i32,
        req: &CreateCommentRequest,
    ) -> Result<ApiResponse<CommentResponse>, ServiceError>;
    async fn update_comment(
        &self,
        user_id: i32,
        comment_id: i32,
        req: &UpdateCommentRequest,
    ) -> Result<ApiResponse<CommentResponse>, ServiceError>;
    async fn delete_comment(&self, user_id: i32, comment_id: i32) -> Result<(), ServiceError>;
}
