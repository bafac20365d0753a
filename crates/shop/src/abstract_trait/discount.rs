use crate::model::discount::Discount as DiscountModel;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynDiscountQueryRepository = Arc<dyn DiscountQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait DiscountQueryRepositoryTrait {
    /// Returns the discount with `code` only if `today` falls inside its window.
    async fn find_active(
        &self,
        code: &str,
        today: NaiveDate,
    ) -> Result<Option<DiscountModel>, RepositoryError>;
}
