use crate::{
    abstract_trait::cart::{
        repository::{DynCartCommandRepository, DynCartQueryRepository},
        service::CartQueryServiceTrait,
    },
    domain::response::{api::ApiResponse, cart::CartResponse},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracing},
};

#[derive(Clone)]
pub struct CartQueryService {
    query: DynCartQueryRepository,
    command: DynCartCommandRepository,
    tracing: ServiceTracing,
}

pub struct CartQueryServiceDeps {
    pub query: DynCartQueryRepository,
    pub command: DynCartCommandRepository,
}

impl CartQueryService {
    pub fn new(deps: CartQueryServiceDeps, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "cart_query_service", "CartQueryService");

        Self {
            query: deps.query,
            command: deps.command,
            tracing: ServiceTracing::new("cart-query-service", metrics),
        }
    }

    async fn load(&self, user_id: i32) -> Result<CartResponse, ServiceError> {
        let cart = self.command.get_or_create_cart(user_id).await?;
        let lines = self.query.find_lines(cart.cart_id).await?;
        Ok(CartResponse::new(cart.cart_id, cart.user_id, lines))
    }
}

#[async_trait]
impl CartQueryServiceTrait for CartQueryService {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracing.start(
            "get_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "get"),
                KeyValue::new("cart.user_id", user_id.to_string()),
            ],
        );

        match self.load(user_id).await {
            Ok(cart) => {
                self.tracing
                    .success(&tracing_ctx, method, "Cart retrieved successfully");
                Ok(ApiResponse::success("Cart retrieved successfully", cart))
            }
            Err(e) => {
                self.tracing.failure(&tracing_ctx, method, &e.to_string());
                Err(e)
            }
        }
    }
}
