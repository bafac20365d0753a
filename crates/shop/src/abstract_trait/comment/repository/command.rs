use crate::{
    domain::requests::comment::{CreateCommentRecordRequest, UpdateCommentRecordRequest},
    model::comment::Comment as CommentModel,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCommentCommandRepository = Arc<dyn CommentCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CommentCommandRepositoryTrait {
    async fn create_comment(
        &self,
        req: &CreateCommentRecordRequest,
    ) -> Result<CommentModel, RepositoryError>;
    async fn update_comment(
        &self,
        req: &UpdateCommentRecordRequest,
    ) -> Result<CommentModel, RepositoryError>;
    async fn delete_comment(&self, id: i32) -> Result<(), RepositoryError>;
}
