use super::{USER_NOT_FOUND, welcome::welcome_email};
use crate::{
    abstract_trait::user::{
        repository::DynUserCommandRepository, service::UserCommandServiceTrait,
    },
    domain::{
        requests::user::{
            CreateUserRecordRequest, RegisterUserRequest, UpdateUserRecordRequest,
            UpdateUserRequest,
        },
        response::{api::ApiResponse, user::UserResponse},
    },
    model::user::User as UserModel,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynKafka},
    domain::USER_REGISTERED_TOPIC,
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, ServiceTracing},
};
use tracing::{info, warn};

#[derive(Clone)]
pub struct UserCommandService {
    command: DynUserCommandRepository,
    hashing: DynHashing,
    kafka: DynKafka,
    shop_url: String,
    tracing: ServiceTracing,
}

pub struct UserCommandServiceDeps {
    pub command: DynUserCommandRepository,
    pub hashing: DynHashing,
    pub kafka: DynKafka,
    pub shop_url: String,
}

impl UserCommandService {
    pub fn new(deps: UserCommandServiceDeps, registry: &mut Registry) -> Self {
        let UserCommandServiceDeps {
            command,
            hashing,
            kafka,
            shop_url,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "user_command_service", "UserCommandService");

        Self {
            command,
            hashing,
            kafka,
            shop_url,
            tracing: ServiceTracing::new("user-command-service", metrics),
        }
    }

    async fn create(&self, req: &RegisterUserRequest) -> Result<UserModel, ServiceError> {
        let password = self.hashing.hash_password(&req.password).await?;

        let user = self
            .command
            .create_user(&CreateUserRecordRequest {
                username: req.username.trim().to_string(),
                email: req.email.trim().to_string(),
                password,
                phone_number: req.phone_number.clone(),
                address: req.address.clone(),
                date_of_birth: req.date_of_birth,
            })
            .await?;

        self.send_welcome(&user).await;

        Ok(user)
    }

    async fn update(
        &self,
        current_user: i32,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<UserModel, ServiceError> {
        if current_user != id {
            return Err(ServiceError::NotFound(USER_NOT_FOUND.into()));
        }

        let password = match &req.password {
            Some(plain) => Some(self.hashing.hash_password(plain).await?),
            None => None,
        };

        let user = self
            .command
            .update_user(&UpdateUserRecordRequest {
                user_id: id,
                email: req.email.as_deref().map(str::trim).map(str::to_string),
                password,
                phone_number: req.phone_number.clone(),
                address: req.address.clone(),
                date_of_birth: req.date_of_birth,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::NotFound(USER_NOT_FOUND.into()),
                other => ServiceError::Repo(other),
            })?;

        Ok(user)
    }

    /// Best effort: a broker failure never undoes the registration.
    async fn send_welcome(&self, user: &UserModel) {
        let email = welcome_email(user, &self.shop_url);
        let payload = match serde_json::to_vec(&email) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Failed to encode welcome email: {e}");
                return;
            }
        };

        let key = user.user_id.to_string();
        match self
            .kafka
            .publish(USER_REGISTERED_TOPIC, &key, &payload)
            .await
        {
            Ok(()) => info!("📧 Queued welcome email for user {key}"),
            Err(e) => warn!("⚠️ Failed to queue welcome email for user {key}: {e}"),
        }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn register(
        &self,
        req: &RegisterUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 Registering user {}", req.username);

        let method = Method::Post;
        let tracing_ctx = self.tracing.start(
            "register_user",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("operation", "register"),
                KeyValue::new("user.username", req.username.clone()),
            ],
        );

        let result = self.create(req).await.map(|user| {
            ApiResponse::success("User registered successfully", UserResponse::from(user))
        });

        self.tracing
            .finish(&tracing_ctx, method, "User registered successfully", result)
    }

    async fn update_user(
        &self,
        current_user: i32,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let method = Method::Patch;
        let tracing_ctx = self.tracing.start(
            "update_user",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("operation", "update"),
                KeyValue::new("user.id", id.to_string()),
            ],
        );

        let result = self.update(current_user, id, req).await.map(|user| {
            ApiResponse::success("User updated successfully", UserResponse::from(user))
        });

        self.tracing
            .finish(&tracing_ctx, method, "User updated successfully", result)
    }
}
