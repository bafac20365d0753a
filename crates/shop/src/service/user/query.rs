use super::USER_NOT_FOUND;
use crate::{
    abstract_trait::user::{repository::DynUserQueryRepository, service::UserQueryServiceTrait},
    domain::response::{api::ApiResponse, user::UserResponse},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracing},
};

#[derive(Clone)]
pub struct UserQueryService {
    query: DynUserQueryRepository,
    tracing: ServiceTracing,
}

pub struct UserQueryServiceDeps {
    pub query: DynUserQueryRepository,
}

impl UserQueryService {
    pub fn new(deps: UserQueryServiceDeps, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "user_query_service", "UserQueryService");

        Self {
            query: deps.query,
            tracing: ServiceTracing::new("user-query-service", metrics),
        }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_by_id(
        &self,
        current_user: i32,
        id: i32,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracing.start(
            "find_user",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("user.id", id.to_string()),
            ],
        );

        let result = if current_user != id {
            Err(ServiceError::NotFound(USER_NOT_FOUND.into()))
        } else {
            match self.query.find_by_id(id).await {
                Ok(Some(user)) => Ok(ApiResponse::success(
                    "User retrieved successfully",
                    UserResponse::from(user),
                )),
                Ok(None) => Err(ServiceError::NotFound(USER_NOT_FOUND.into())),
                Err(e) => Err(ServiceError::Repo(e)),
            }
        };

        self.tracing
            .finish(&tracing_ctx, method, "User retrieved successfully", result)
    }
}
