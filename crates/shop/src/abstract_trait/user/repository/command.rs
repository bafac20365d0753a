use crate::{
    domain::requests::user::{CreateUserRecordRequest, UpdateUserRecordRequest},
    model::user::User as UserModel,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

/// Duplicate usernames or phone numbers surface as `RepositoryError::AlreadyExists`.
#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(
        &self,
        req: &CreateUserRecordRequest,
    ) -> Result<UserModel, RepositoryError>;
    async fn update_user(
        &self,
        req: &UpdateUserRecordRequest,
    ) -> Result<UserModel, RepositoryError>;
}
