use crate::{
    abstract_trait::order::service::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::order::{CheckOrderRequest, PlaceOrderRequest},
        response::{api::ApiResponse, order::OrderResponse},
    },
    middleware::{
        jwt::{CurrentUser, auth_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/order/",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation error, insufficient stock or invalid discount"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Variant not found")
    )
)]
pub async fn place_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<PlaceOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.place_order(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/order/my-orders/",
    tag = "Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders of the current user", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn my_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.my_orders(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/order/check-order/",
    tag = "Order",
    request_body = CheckOrderRequest,
    responses(
        (status = 200, description = "Order matching the phone number", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Phone number or order code missing"),
        (status = 404, description = "Order not found or phone number does not match")
    )
)]
pub async fn check_order(
    Extension(service): Extension<DynOrderQueryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.check_order(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/order/", post(place_order))
        .route("/order/my-orders/", get(my_orders))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()));

    let public = OpenApiRouter::new().route("/order/check-order/", post(check_order));

    protected
        .merge(public)
        .layer(Extension(app_state.di_container.order_command.clone()))
        .layer(Extension(app_state.di_container.order_query.clone()))
}
