use crate::domain::{
    requests::comment::FindAllComments,
    response::{api::ApiResponse, comment::CommentResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCommentQueryService = Arc<dyn CommentQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CommentQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllComments,
    ) -> Result<ApiResponse<Vec<CommentResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CommentResponse>, ServiceError>;
}
