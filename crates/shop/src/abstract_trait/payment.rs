use crate::domain::response::payment::PaymentResult;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynPaymentGateway = Arc<dyn PaymentGatewayTrait + Send + Sync>;

#[async_trait]
pub trait PaymentGatewayTrait {
    async fn create_payment(&self, amount: i64) -> Result<PaymentResult, ServiceError>;
}
