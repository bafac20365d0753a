use crate::{
    abstract_trait::comment::service::{DynCommentCommandService, DynCommentQueryService},
    domain::{
        requests::comment::{
            CreateCommentRequest, FindAllComments, ReplaceCommentRequest, UpdateCommentRequest,
        },
        response::{api::ApiResponse, comment::CommentResponse},
    },
    middleware::{
        jwt::{CurrentUser, auth_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/comments/",
    tag = "Comment",
    params(FindAllComments),
    responses(
        (status = 200, description = "Comments, newest first", body = ApiResponse<Vec<CommentResponse>>)
    )
)]
pub async fn get_comments(
    Extension(service): Extension<DynCommentQueryService>,
    Query(params): Query<FindAllComments>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/comments/{id}/",
    tag = "Comment",
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment detail", body = ApiResponse<CommentResponse>),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn get_comment(
    Extension(service): Extension<DynCommentQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/comments/",
    tag = "Comment",
    security(("bearer_auth" = [])),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = ApiResponse<CommentResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Variant not found")
    )
)]
pub async fn create_comment(
    Extension(service): Extension<DynCommentCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_comment(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/comments/{id}/",
    tag = "Comment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = ApiResponse<CommentResponse>),
        (status = 403, description = "Not the author of the comment"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn update_comment(
    Extension(service): Extension<DynCommentCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCommentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_comment(user_id, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/comments/{id}/",
    tag = "Comment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = ReplaceCommentRequest,
    responses(
        (status = 200, description = "Comment replaced", body = ApiResponse<CommentResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the author of the comment"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn replace_comment(
    Extension(service): Extension<DynCommentCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<ReplaceCommentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .update_comment(user_id, id, &UpdateCommentRequest::from(body))
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/comments/{id}/",
    tag = "Comment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 403, description = "Not the author of the comment"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn delete_comment(
    Extension(service): Extension<DynCommentCommandService>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_comment(user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn comment_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/comments/", post(create_comment))
        .route(
            "/comments/{id}/",
            patch(update_comment)
                .put(replace_comment)
                .delete(delete_comment),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()));

    let public = OpenApiRouter::new()
        .route("/comments/", get(get_comments))
        .route("/comments/{id}/", get(get_comment));

    protected
        .merge(public)
        .layer(Extension(app_state.di_container.comment_command.clone()))
        .layer(Extension(app_state.di_container.comment_query.clone()))
}
