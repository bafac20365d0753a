use crate::{
    abstract_trait::{
        comment::{
            repository::{DynCommentCommandRepository, DynCommentQueryRepository},
            service::CommentCommandServiceTrait,
        },
        variant::DynVariantQueryRepository,
    },
    domain::{
        requests::comment::{
            CreateCommentRecordRequest, CreateCommentRequest, UpdateCommentRecordRequest,
            UpdateCommentRequest,
        },
        response::{api::ApiResponse, comment::CommentResponse},
    },
    model::comment::Comment as CommentModel,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracing},
};
use tracing::{info, warn};

pub const EDIT_FORBIDDEN: &str = "You do not have permission to edit this comment.";
pub const DELETE_FORBIDDEN: &str = "You do not have permission to delete this comment.";

#[derive(Clone)]
pub struct CommentCommandService {
    query: DynCommentQueryRepository,
    command: DynCommentCommandRepository,
    variant_query: DynVariantQueryRepository,
    tracing: ServiceTracing,
}

pub struct CommentCommandServiceDeps {
    pub query: DynCommentQueryRepository,
    pub command: DynCommentCommandRepository,
    pub variant_query: DynVariantQueryRepository,
}

impl CommentCommandService {
    pub fn new(deps: CommentCommandServiceDeps, registry: &mut Registry) -> Self {
        let CommentCommandServiceDeps {
            query,
            command,
            variant_query,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "comment_command_service", "CommentCommandService");

        Self {
            query,
            command,
            variant_query,
            tracing: ServiceTracing::new("comment-command-service", metrics),
        }
    }

    /// Loads the comment and checks that `user_id` wrote it.
    async fn owned(
        &self,
        user_id: i32,
        comment_id: i32,
        forbidden: &str,
    ) -> Result<CommentModel, ServiceError> {
        let comment = self
            .query
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Comment not found".into()))?;

        if comment.user_id != user_id {
            warn!(
                "⚠️ User {} tried to modify comment {} owned by {}",
                user_id, comment_id, comment.user_id
            );
            return Err(ServiceError::Forbidden(forbidden.to_string()));
        }

        Ok(comment)
    }

    async fn create(
        &self,
        user_id: i32,
        req: &CreateCommentRequest,
    ) -> Result<CommentModel, ServiceError> {
        self.variant_query
            .find_by_id(req.variant_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Variant not found".into()))?;

        let comment = self
            .command
            .create_comment(&CreateCommentRecordRequest {
                user_id,
                variant_id: req.variant_id,
                comment: req.comment.clone(),
                star: req.star,
            })
            .await?;

        Ok(comment)
    }

    async fn update(
        &self,
        user_id: i32,
        comment_id: i32,
        req: &UpdateCommentRequest,
    ) -> Result<CommentModel, ServiceError> {
        let existing = self.owned(user_id, comment_id, EDIT_FORBIDDEN).await?;

        let comment = self
            .command
            .update_comment(&UpdateCommentRecordRequest {
                comment_id,
                comment: req.comment.clone().unwrap_or(existing.comment),
                star: req.star.unwrap_or(existing.star),
            })
            .await?;

        Ok(comment)
    }

    async fn delete(&self, user_id: i32, comment_id: i32) -> Result<(), ServiceError> {
        self.owned(user_id, comment_id, DELETE_FORBIDDEN).await?;
        self.command.delete_comment(comment_id).await?;
        Ok(())
    }
}

#[async_trait]
impl CommentCommandServiceTrait for CommentCommandService {
    async fn create_comment(
        &self,
        user_id: i32,
        req: &CreateCommentRequest,
    ) -> Result<ApiResponse<CommentResponse>, ServiceError> {
        info!(
            "💬 User {} commenting on variant {}",
            user_id, req.variant_id
        );

        let method = Method::Post;
        let tracing_ctx = self.tracing.start(
            "create_comment",
            vec![
                KeyValue::new("component", "comment"),
                KeyValue::new("operation", "create"),
                KeyValue::new("comment.variant_id", req.variant_id.to_string()),
            ],
        );

        let result = self.create(user_id, req).await.map(|comment| {
            ApiResponse::success(
                "Comment created successfully",
                CommentResponse::from(comment),
            )
        });

        self.tracing.finish(&tracing_ctx, method, "Comment created successfully", result)
    }

    async fn update_comment(
        &self,
        user_id: i32,
        comment_id: i32,
        req: &UpdateCommentRequest,
    ) -> Result<ApiResponse<CommentResponse>, ServiceError> {
        let method = Method::Patch;
        let tracing_ctx = self.tracing.start(
            "update_comment",
            vec![
                KeyValue::new("component", "comment"),
                KeyValue::new("operation", "update"),
                KeyValue::new("comment.id", comment_id.to_string()),
            ],
        );

        let result = self
            .update(user_id, comment_id, req)
            .await
            .map(|comment| {
                ApiResponse::success(
                    "Comment updated successfully",
                    CommentResponse::from(comment),
                )
            });

        self.tracing.finish(&tracing_ctx, method, "Comment updated successfully", result)
    }

    async fn delete_comment(&self, user_id: i32, comment_id: i32) -> Result<(), ServiceError> {
        let method = Method::Delete;
        let tracing_ctx = self.tracing.start(
            "delete_comment",
            vec![
                KeyValue::new("component", "comment"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("comment.id", comment_id.to_string()),
            ],
        );

        let result = self.delete(user_id, comment_id).await;

        self.tracing.finish(&tracing_ctx, method, "Comment deleted successfully", result)
    }
}
