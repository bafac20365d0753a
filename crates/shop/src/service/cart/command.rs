use super::{ITEM_NOT_IN_CART, VARIANT_NOT_FOUND};
use crate::{
    abstract_trait::{
        cart::{
            repository::{DynCartCommandRepository, DynCartQueryRepository},
            service::CartCommandServiceTrait,
        },
        variant::DynVariantQueryRepository,
    },
    domain::{
        requests::cart::{AddToCartRequest, RemoveFromCartRequest, UpdateCartQuantityRequest},
        response::{api::ApiResponse, cart::CartItemResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracing},
};
use tracing::info;

#[derive(Clone)]
pub struct CartCommandService {
    query: DynCartQueryRepository,
    command: DynCartCommandRepository,
    variant_query: DynVariantQueryRepository,
    tracing: ServiceTracing,
}

pub struct CartCommandServiceDeps {
    pub query: DynCartQueryRepository,
    pub command: DynCartCommandRepository,
    pub variant_query: DynVariantQueryRepository,
}

impl CartCommandService {
    pub fn new(deps: CartCommandServiceDeps, registry: &mut Registry) -> Self {
        let CartCommandServiceDeps {
            query,
            command,
            variant_query,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "cart_command_service", "CartCommandService");

        Self {
            query,
            command,
            variant_query,
            tracing: ServiceTracing::new("cart-command-service", metrics),
        }
    }

    async fn ensure_variant(&self, variant_id: i32) -> Result<(), ServiceError> {
        self.variant_query
            .find_by_id(variant_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(VARIANT_NOT_FOUND.into()))
    }

    async fn add(
        &self,
        user_id: i32,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError> {
        self.ensure_variant(req.variant_id).await?;
        let cart = self.command.get_or_create_cart(user_id).await?;
        let item = self
            .command
            .add_item(cart.cart_id, req.variant_id, req.quantity)
            .await?;

        Ok(ApiResponse::success(
            "Item added to cart.",
            CartItemResponse::from(item),
        ))
    }

    async fn remove(&self, user_id: i32, req: &RemoveFromCartRequest) -> Result<(), ServiceError> {
        let cart = self
            .query
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(ITEM_NOT_IN_CART.into()))?;

        if self.command.remove_item(cart.cart_id, req.cart_item_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(ITEM_NOT_IN_CART.into()))
        }
    }

    async fn set_quantity(
        &self,
        user_id: i32,
        req: &UpdateCartQuantityRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError> {
        if req.quantity < 1 {
            return Err(ServiceError::validation(
                "Quantity must be greater than or equal to 1",
            ));
        }

        self.ensure_variant(req.variant_id).await?;
        let cart = self.command.get_or_create_cart(user_id).await?;

        let item = self
            .command
            .set_item_quantity(cart.cart_id, req.variant_id, req.quantity)
            .await?
            .ok_or_else(|| ServiceError::NotFound(ITEM_NOT_IN_CART.into()))?;

        Ok(ApiResponse::success(
            "Item quantity updated.",
            CartItemResponse::from(item),
        ))
    }
}

#[async_trait]
impl CartCommandServiceTrait for CartCommandService {
    async fn add_to_cart(
        &self,
        user_id: i32,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError> {
        info!(
            "🛒 Adding {} x variant {} to cart of user {}",
            req.quantity, req.variant_id, user_id
        );

        let method = Method::Post;
        let tracing_ctx = self.tracing.start(
            "add_to_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "add"),
                KeyValue::new("cart.user_id", user_id.to_string()),
                KeyValue::new("cart.variant_id", req.variant_id.to_string()),
            ],
        );

        let result = self.add(user_id, req).await;

        self.tracing.finish(&tracing_ctx, method, "Item added to cart", result)
    }

    async fn remove_from_cart(
        &self,
        user_id: i32,
        req: &RemoveFromCartRequest,
    ) -> Result<(), ServiceError> {
        let method = Method::Post;
        let tracing_ctx = self.tracing.start(
            "remove_from_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "remove"),
                KeyValue::new("cart.user_id", user_id.to_string()),
                KeyValue::new("cart.item_id", req.cart_item_id.to_string()),
            ],
        );

        let result = self.remove(user_id, req).await;

        self.tracing.finish(&tracing_ctx, method, "Item removed from cart", result)
    }

    async fn update_quantity(
        &self,
        user_id: i32,
        req: &UpdateCartQuantityRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError> {
        let method = Method::Patch;
        let tracing_ctx = self.tracing.start(
            "update_cart_quantity",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "update_quantity"),
                KeyValue::new("cart.user_id", user_id.to_string()),
                KeyValue::new("cart.variant_id", req.variant_id.to_string()),
            ],
        );

        let result = self.set_quantity(user_id, req).await;

        self.tracing.finish(&tracing_ctx, method, "Cart quantity updated", result)
    }
}
