use super::{notification::OrderConfirmation, pricing};
use crate::{
    abstract_trait::{
        cache::DynCatalogCache,
        discount::DynDiscountQueryRepository,
        order::{repository::DynOrderCommandRepository, service::OrderCommandServiceTrait},
        payment::DynPaymentGateway,
        user::DynUserQueryRepository,
        variant::DynVariantQueryRepository,
    },
    domain::{
        requests::order::{CreateOrderRecordRequest, PlaceOrderRequest, ShipDate},
        response::{api::ApiResponse, order::OrderResponse},
    },
    model::order::{OrderDetail as OrderDetailModel, OrderDetailStatus},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynKafka,
    domain::ORDER_CONFIRMATION_TOPIC,
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracing},
};
use tracing::{info, warn};

pub const MOMO_PAYMENT: &str = "MoMo";

#[derive(Clone)]
pub struct OrderCommandService {
    user_query: DynUserQueryRepository,
    variant_query: DynVariantQueryRepository,
    discount_query: DynDiscountQueryRepository,
    command: DynOrderCommandRepository,
    payment: DynPaymentGateway,
    kafka: DynKafka,
    cache: DynCatalogCache,
    orders_link: String,
    tracing: ServiceTracing,
}

pub struct OrderCommandServiceDeps {
    pub user_query: DynUserQueryRepository,
    pub variant_query: DynVariantQueryRepository,
    pub discount_query: DynDiscountQueryRepository,
    pub command: DynOrderCommandRepository,
    pub payment: DynPaymentGateway,
    pub kafka: DynKafka,
    pub cache: DynCatalogCache,
    pub orders_link: String,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps, registry: &mut Registry) -> Self {
        let OrderCommandServiceDeps {
            user_query,
            variant_query,
            discount_query,
            command,
            payment,
            kafka,
            cache,
            orders_link,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "order_command_service", "OrderCommandService");

        Self {
            user_query,
            variant_query,
            discount_query,
            command,
            payment,
            kafka,
            cache,
            orders_link,
            tracing: ServiceTracing::new("order-command-service", metrics),
        }
    }

    async fn place(
        &self,
        user_id: i32,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))?;

        let variant = self
            .variant_query
            .find_by_id(req.variant_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Variant not found".into()))?;

        if req.quantity > variant.quantity {
            warn!(
                "⚠️ Requested {} of variant {} but only {} in stock",
                req.quantity, variant.variant_id, variant.quantity
            );
            return Err(ServiceError::InsufficientStock);
        }

        let discount = match req.discount_code() {
            Some(code) => {
                let today = Utc::now().date_naive();
                let discount = self
                    .discount_query
                    .find_active(code, today)
                    .await?
                    .filter(|d| d.is_active_on(today))
                    .ok_or(ServiceError::InvalidDiscount)?;
                Some(discount)
            }
            None => None,
        };

        let price = pricing::final_price(&variant, req.quantity, discount.as_ref());

        let record = CreateOrderRecordRequest {
            user_id,
            variant_id: variant.variant_id,
            quantity: req.quantity,
            discount_id: discount.as_ref().map(|d| d.discount_id),
            note: req.note.clone(),
            ship_address: req.ship_address.clone(),
            ship_date: req
                .ship_date
                .as_ref()
                .map(ShipDate::naive_utc)
                .unwrap_or_else(|| Utc::now().naive_utc()),
            payment: req.payment.clone(),
            price,
        };

        let placed = self
            .command
            .place_order(&record)
            .await?
            .ok_or(ServiceError::InsufficientStock)?;

        self.cache.invalidate_product(variant.product_id).await;

        let mut detail = placed.detail;
        let mut short_link = None;

        if req.payment == MOMO_PAYMENT
            && let Some(link) = self.request_payment(price).await
        {
            detail = self.mark_paid(detail).await;
            short_link = Some(link);
        }

        self.notify(OrderConfirmation {
            user: &user,
            order: &placed.order,
            variant: &variant,
            quantity: req.quantity,
            total_price: price,
        })
        .await;

        let mut response = OrderResponse::with_details(placed.order, vec![detail]);
        response.short_link = short_link;

        Ok(ApiResponse::success("Order placed successfully", response))
    }

    /// Pay URL when the gateway accepted the payment; every failure is swallowed.
    async fn request_payment(&self, price: f64) -> Option<String> {
        match self.payment.create_payment(price as i64).await {
            Ok(result) => match result.pay_url_if_success() {
                Some(url) => Some(url.to_string()),
                None => {
                    warn!(
                        "⚠️ MoMo declined payment: resultCode={:?} message={:?}",
                        result.result_code, result.message
                    );
                    None
                }
            },
            Err(e) => {
                warn!("⚠️ MoMo payment setup failed: {e}");
                None
            }
        }
    }

    async fn mark_paid(&self, detail: OrderDetailModel) -> OrderDetailModel {
        match self
            .command
            .update_detail_status(detail.order_detail_id, OrderDetailStatus::Done.as_str())
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                warn!(
                    "⚠️ Could not mark order detail {} as paid: {e}",
                    detail.order_detail_id
                );
                detail
            }
        }
    }

    async fn notify(&self, confirmation: OrderConfirmation<'_>) {
        let user = confirmation.user;
        if user.email.trim().is_empty() {
            warn!("⚠️ User {} has no email, skipping confirmation", user.user_id);
            return;
        }

        let email = confirmation.to_email(&self.orders_link);
        let payload = match serde_json::to_vec(&email) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Failed to encode confirmation email: {e}");
                return;
            }
        };

        let key = confirmation.order.order_id.to_string();
        match self
            .kafka
            .publish(ORDER_CONFIRMATION_TOPIC, &key, &payload)
            .await
        {
            Ok(()) => info!("📧 Queued confirmation for order {key}"),
            Err(e) => warn!("⚠️ Failed to queue confirmation for order {key}: {e}"),
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn place_order(
        &self,
        user_id: i32,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🏗️ Placing order for user_id={} variant_id={} quantity={}",
            user_id, req.variant_id, req.quantity
        );

        let method = Method::Post;
        let tracing_ctx = self.tracing.start(
            "place_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "place"),
                KeyValue::new("order.user_id", user_id.to_string()),
                KeyValue::new("order.variant_id", req.variant_id.to_string()),
            ],
        );

        match self.place(user_id, req).await {
            Ok(response) => {
                self.tracing
                    .success(&tracing_ctx, method, "Order placed successfully");
                Ok(response)
            }
            Err(e) => {
                self.tracing.failure(&tracing_ctx, method, &e.to_string());
                Err(e)
            }
        }
    }
}
