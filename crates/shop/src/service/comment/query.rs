use crate::{
    abstract_trait::comment::{
        repository::DynCommentQueryRepository, service::CommentQueryServiceTrait,
    },
    domain::{
        requests::comment::FindAllComments,
        response::{api::ApiResponse, comment::CommentResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracing},
};

#[derive(Clone)]
pub struct CommentQueryService {
    query: DynCommentQueryRepository,
    tracing: ServiceTracing,
}

pub struct CommentQueryServiceDeps {
    pub query: DynCommentQueryRepository,
}

impl CommentQueryService {
    pub fn new(deps: CommentQueryServiceDeps, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "comment_query_service", "CommentQueryService");

        Self {
            query: deps.query,
            tracing: ServiceTracing::new("comment-query-service", metrics),
        }
    }
}

#[async_trait]
impl CommentQueryServiceTrait for CommentQueryService {
    async fn find_all(
        &self,
        req: &FindAllComments,
    ) -> Result<ApiResponse<Vec<CommentResponse>>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracing.start(
            "find_comments",
            vec![
                KeyValue::new("component", "comment"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new(
                    "comment.variant_id",
                    req.variant_id.map(|id| id.to_string()).unwrap_or_default(),
                ),
            ],
        );

        match self.query.find_all(req.variant_id).await {
            Ok(comments) => {
                self.tracing
                    .success(&tracing_ctx, method, "Comments retrieved successfully");
                Ok(ApiResponse::success(
                    "Comments retrieved successfully",
                    comments.into_iter().map(CommentResponse::from).collect(),
                ))
            }
            Err(e) => {
                let e = ServiceError::Repo(e);
                self.tracing.failure(&tracing_ctx, method, &e.to_string());
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CommentResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracing.start(
            "find_comment",
            vec![
                KeyValue::new("component", "comment"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("comment.id", id.to_string()),
            ],
        );

        let result = match self.query.find_by_id(id).await {
            Ok(Some(comment)) => Ok(ApiResponse::success(
                "Comment retrieved successfully",
                CommentResponse::from(comment),
            )),
            Ok(None) => Err(ServiceError::NotFound("Comment not found".into())),
            Err(e) => Err(ServiceError::Repo(e)),
        };

        self.tracing
            .finish(&tracing_ctx, method, "Comment retrieved successfully", result)
    }
}
