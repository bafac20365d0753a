use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::ErrorResponse};
use tracing::debug;

/// The authenticated caller, inserted by [`auth_middleware`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            status: "fail".to_string(),
            message: message.to_string(),
        }),
    )
}

pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let Some(token) = token else {
        return Err(unauthorized(
            "You are not logged in, please provide token",
        ));
    };

    let user_id = match jwt.verify_token(&token, "access") {
        Ok(id) => i32::try_from(id).map_err(|_| unauthorized("Invalid token"))?,
        Err(e) => {
            debug!("Rejected access token: {e}");
            return Err(unauthorized("Invalid token"));
        }
    };

    req.extensions_mut().insert(CurrentUser(user_id));

    Ok(next.run(req).await)
}
