use crate::model::variant::Variant as VariantModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynVariantQueryRepository = Arc<dyn VariantQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait VariantQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<VariantModel>, RepositoryError>;
}
