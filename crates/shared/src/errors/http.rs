use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::InsufficientStock | ServiceError::InvalidDiscount => {
                HttpError::BadRequest(err.to_string())
            }

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) | RepositoryError::AlreadyExists(msg) => {
                    HttpError::Conflict(msg)
                }
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                other => {
                    error!("❌ Unhandled repository error: {other:?}");
                    HttpError::Internal("Repository error".into())
                }
            },

            ServiceError::Bcrypt(err) => {
                error!("❌ Password hashing failed: {err}");
                HttpError::Internal("Failed to process password".into())
            }

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),

            ServiceError::Kafka(err) => {
                HttpError::ServiceUnavailable(format!("Kafka error: {err}"))
            }

            ServiceError::Payment(err) => {
                HttpError::ServiceUnavailable(format!("Payment gateway error: {err}"))
            }

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
