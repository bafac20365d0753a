use crate::{
    domain::requests::order::CreateOrderRecordRequest,
    model::order::{OrderDetail as OrderDetailModel, PlacedOrder},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Decrements stock and writes the order plus its detail line in one transaction.
    /// `Ok(None)` means the stock was no longer sufficient and nothing was written.
    async fn place_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<Option<PlacedOrder>, RepositoryError>;
    async fn update_detail_status(
        &self,
        order_detail_id: i32,
        status: &str,
    ) -> Result<OrderDetailModel, RepositoryError>;
}
