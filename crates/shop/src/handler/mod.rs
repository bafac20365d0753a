mod cart;
mod catalog;
mod comment;
mod order;
mod user;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::cart::cart_routes;
pub use self::catalog::catalog_routes;
pub use self::comment::comment_routes;
pub use self::order::order_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        order::place_order,
        order::my_orders,
        order::check_order,

        cart::get_cart,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::update_quantity,

        catalog::get_products,
        catalog::get_product,
        catalog::get_variant,

        comment::get_comments,
        comment::get_comment,
        comment::create_comment,
        comment::update_comment,
        comment::replace_comment,
        comment::delete_comment,

        user::register_user,
        user::get_user,
        user::update_user,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Order", description = "Checkout and order lookup"),
        (name = "Cart", description = "Shopping cart of the signed-in user"),
        (name = "Catalog", description = "Products and variants"),
        (name = "Comment", description = "Variant reviews"),
        (name = "User", description = "Registration and own profile"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();
    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("Failed to encode metrics: {e}"),
        );
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: Arc<AppState>) -> Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(app_state.clone())
            .merge(catalog_routes(app_state.clone()))
            .merge(cart_routes(app_state.clone()))
            .merge(order_routes(app_state.clone()))
            .merge(comment_routes(app_state.clone()))
            .merge(user_routes(app_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
