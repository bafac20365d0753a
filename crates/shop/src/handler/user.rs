use crate::{
    abstract_trait::user::service::{DynUserCommandService, DynUserQueryService},
    domain::{
        requests::user::{RegisterUserRequest, UpdateUserRequest},
        response::{api::ApiResponse, user::UserResponse},
    },
    middleware::{
        jwt::{CurrentUser, auth_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
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
    path = "/user/",
    tag = "User",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or phone number already taken")
    )
)]
pub async fn register_user(
    Extension(service): Extension<DynUserCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/user/{id}/",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Own profile", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserQueryService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(user_id, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/user/{id}/",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Phone number already taken")
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_user(user_id, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/user/{id}/", get(get_user).patch(update_user))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()));

    let public = OpenApiRouter::new().route("/user/", post(register_user));

    protected
        .merge(public)
        .layer(Extension(app_state.di_container.user_command.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
}
