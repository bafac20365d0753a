use crate::{
    abstract_trait::cart::service::{DynCartCommandService, DynCartQueryService},
    domain::{
        requests::cart::{AddToCartRequest, RemoveFromCartRequest, UpdateCartQuantityRequest},
        response::{
            api::ApiResponse,
            cart::{CartItemResponse, CartResponse},
        },
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
    routing::{get, patch, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/cart/",
    tag = "Cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cart of the current user", body = ApiResponse<CartResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartQueryService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_cart(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/cart/add-to-cart/",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Item added", body = ApiResponse<CartItemResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Variant not found")
    )
)]
pub async fn add_to_cart(
    Extension(service): Extension<DynCartCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_to_cart(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/cart/remove-from-cart/",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = RemoveFromCartRequest,
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "Item is not in the cart")
    )
)]
pub async fn remove_from_cart(
    Extension(service): Extension<DynCartCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<RemoveFromCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.remove_from_cart(user_id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/cart/update-quantity/",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = UpdateCartQuantityRequest,
    responses(
        (status = 200, description = "Quantity updated", body = ApiResponse<CartItemResponse>),
        (status = 400, description = "Quantity must be an integer of at least 1"),
        (status = 404, description = "Variant not found or not in the cart")
    )
)]
pub async fn update_quantity(
    Extension(service): Extension<DynCartCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCartQuantityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_quantity(user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/cart/", get(get_cart))
        .route("/cart/add-to-cart/", post(add_to_cart))
        .route("/cart/remove-from-cart/", post(remove_from_cart))
        .route("/cart/update-quantity/", patch(update_quantity))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.cart_command.clone()))
        .layer(Extension(app_state.di_container.cart_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
