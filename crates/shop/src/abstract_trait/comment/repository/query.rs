use crate::model::comment::Comment as CommentModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCommentQueryRepository = Arc<dyn CommentQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CommentQueryRepositoryTrait {
    async fn find_all(&self, variant_id: Option<i32>) -> Result<Vec<CommentModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CommentModel>, RepositoryError>;
}
