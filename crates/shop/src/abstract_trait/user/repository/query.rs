use crate::model::user::User as UserModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError>;
}
