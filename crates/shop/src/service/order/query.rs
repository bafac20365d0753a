use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::{
        requests::order::CheckOrderRequest,
        response::{api::ApiResponse, order::OrderResponse},
    },
    model::order::{Order as OrderModel, OrderDetail as OrderDetailModel},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracing},
};
use std::collections::HashMap;
use tracing::info;

pub const CHECK_ORDER_REQUIRED: &str = "Phone number and order code are required.";
pub const CHECK_ORDER_NOT_FOUND: &str = "Order not found or phone number does not match.";

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    tracing: ServiceTracing,
}

pub struct OrderQueryServiceDeps {
    pub query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(deps: OrderQueryServiceDeps, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "order_query_service", "OrderQueryService");

        Self {
            query: deps.query,
            tracing: ServiceTracing::new("order-query-service", metrics),
        }
    }

    async fn with_details(
        &self,
        orders: Vec<OrderModel>,
    ) -> Result<Vec<OrderResponse>, ServiceError> {
        let ids: Vec<i32> = orders.iter().map(|order| order.order_id).collect();
        let details = self.query.find_details_by_orders(&ids).await?;

        let mut by_order: HashMap<i32, Vec<OrderDetailModel>> = HashMap::new();
        for detail in details {
            by_order.entry(detail.order_id).or_default().push(detail);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let details = by_order.remove(&order.order_id).unwrap_or_default();
                OrderResponse::with_details(order, details)
            })
            .collect())
    }

    async fn lookup(&self, req: &CheckOrderRequest) -> Result<OrderResponse, ServiceError> {
        let phone_number = req
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty());

        let (phone_number, order_code) = match (phone_number, &req.order_code) {
            (Some(phone), Some(code)) if !code.is_blank() => (phone, code),
            _ => return Err(ServiceError::validation(CHECK_ORDER_REQUIRED)),
        };

        let order_id = order_code
            .as_order_id()
            .ok_or_else(|| ServiceError::validation("Order code must be a number."))?;

        let order = self
            .query
            .find_by_id_and_phone(order_id, phone_number)
            .await?
            .ok_or_else(|| ServiceError::NotFound(CHECK_ORDER_NOT_FOUND.into()))?;

        let mut responses = self.with_details(vec![order]).await?;
        responses
            .pop()
            .ok_or_else(|| ServiceError::NotFound(CHECK_ORDER_NOT_FOUND.into()))
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn my_orders(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("📋 Listing orders for user_id={}", user_id);

        let method = Method::Get;
        let tracing_ctx = self.tracing.start(
            "my_orders",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "my_orders"),
                KeyValue::new("order.user_id", user_id.to_string()),
            ],
        );

        let result = match self.query.find_by_user(user_id).await {
            Ok(orders) => self.with_details(orders).await,
            Err(e) => Err(ServiceError::Repo(e)),
        };

        match result {
            Ok(orders) => {
                self.tracing
                    .success(&tracing_ctx, method, "Orders retrieved successfully");
                Ok(ApiResponse::success("Orders retrieved successfully", orders))
            }
            Err(e) => {
                self.tracing.failure(&tracing_ctx, method, &e.to_string());
                Err(e)
            }
        }
    }

    async fn check_order(
        &self,
        req: &CheckOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let method = Method::Post;
        let tracing_ctx = self.tracing.start(
            "check_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "check"),
            ],
        );

        match self.lookup(req).await {
            Ok(order) => {
                self.tracing.success(&tracing_ctx, method, "Order found");
                Ok(ApiResponse::success("Order found", order))
            }
            Err(e) => {
                self.tracing.failure(&tracing_ctx, method, &e.to_string());
                Err(e)
            }
        }
    }
}
