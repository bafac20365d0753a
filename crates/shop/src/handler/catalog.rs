use crate::{
    abstract_trait::catalog::DynCatalogQueryService,
    domain::response::{
        api::ApiResponse,
        catalog::{ProductResponse, VariantResponse},
    },
    state::AppState,
};
use axum::{
    Extension, Json, extract::Path, http::StatusCode, response::IntoResponse, routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/products/",
    tag = "Catalog",
    responses(
        (status = 200, description = "All products with brand, images and variants", body = ApiResponse<Vec<ProductResponse>>)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynCatalogQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_products().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/{id}/",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynCatalogQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/variants/{id}/",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Variant ID")),
    responses(
        (status = 200, description = "Variant details", body = ApiResponse<VariantResponse>),
        (status = 404, description = "Variant not found")
    )
)]
pub async fn get_variant(
    Extension(service): Extension<DynCatalogQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_variant(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn catalog_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products/", get(get_products))
        .route("/products/{id}/", get(get_product))
        .route("/variants/{id}/", get(get_variant))
        .layer(Extension(app_state.di_container.catalog_query.clone()))
}
