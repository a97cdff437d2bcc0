//! Admin catalog handlers: product CRUD, categories, image upload.

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use super::auth::require_admin;
use crate::api::dto::{
    ProductListResponse, SaveProductRequest, SaveProductResponse, UploadImagesResponse,
};
use crate::app_state::AppState;
use crate::domain::product::{MAX_IMAGES, ProductId};
use crate::domain::{Category, image};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /admin/products` — Full product list for the admin catalog view.
///
/// # Errors
///
/// Returns 401 without a valid session.
#[utoipa::path(
    get,
    path = "/api/v1/admin/products",
    tag = "Admin",
    summary = "List all products",
    description = "Every product regardless of status, newest first.",
    responses(
        (status = 200, description = "Product list", body = ProductListResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;
    let data = state.catalog.all_products().await;
    let total = data.len();
    Ok(Json(ProductListResponse { data, total }))
}

/// `POST /admin/products` — Create or update a product.
///
/// Validation (required fields, image limit, highlighted-slot limit)
/// runs before any store write; a rejected draft leaves the catalog
/// untouched.
///
/// # Errors
///
/// Returns 400 on missing fields, 422 when a catalog rule is violated,
/// 404 when editing an unknown product, and 401 without a session.
#[utoipa::path(
    post,
    path = "/api/v1/admin/products",
    tag = "Admin",
    summary = "Save a product",
    description = "Creates a product (generating its 5-digit code) or updates an existing one by id.",
    request_body = SaveProductRequest,
    responses(
        (status = 200, description = "Product saved", body = SaveProductResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 404, description = "Unknown product id", body = ErrorResponse),
        (status = 422, description = "Highlight or image limit exceeded", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn save_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SaveProductRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;
    let product = state.catalog.save_product(req.draft, req.id).await?;
    Ok(Json(SaveProductResponse { product }))
}

/// `DELETE /admin/products/{id}` — Delete a product.
///
/// Click rows referencing the product are left behind; the analytics
/// view shows those as removed products.
///
/// # Errors
///
/// Returns 401 without a valid session.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/products/{id}",
    tag = "Admin",
    summary = "Delete a product",
    params(
        ("id" = uuid::Uuid, Path, description = "Product UUID"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;
    state.catalog.delete_product(ProductId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /admin/categories` — Category list for the product form.
///
/// # Errors
///
/// Returns 401 without a valid session.
#[utoipa::path(
    get,
    path = "/api/v1/admin/categories",
    tag = "Admin",
    summary = "List categories",
    responses(
        (status = 200, description = "Categories, name ascending", body = Vec<Category>),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;
    Ok(Json(state.catalog.all_categories().await))
}

/// `POST /admin/images` — Normalize a batch of uploaded images.
///
/// Each multipart part is decoded, downscaled to fit 800×800, and
/// re-encoded as an inline JPEG data URL. A part that fails to decode
/// is skipped and counted; the rest of the batch continues. At most
/// 5 images are returned per request.
///
/// # Errors
///
/// Returns 400 when the multipart stream itself is malformed and 401
/// without a valid session.
#[utoipa::path(
    post,
    path = "/api/v1/admin/images",
    tag = "Admin",
    summary = "Upload and normalize images",
    description = "Accepts multipart image files and returns bounded-size inline JPEG data URLs.",
    responses(
        (status = 200, description = "Normalized images", body = UploadImagesResponse),
        (status = 400, description = "Malformed multipart body", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn upload_images(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;

    let mut images = Vec::new();
    let mut skipped = 0usize;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::InvalidRequest(format!("malformed multipart body: {e}")))?
    {
        if images.len() >= MAX_IMAGES {
            break;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| GatewayError::InvalidRequest(format!("malformed multipart body: {e}")))?;
        match image::normalize(&bytes) {
            Ok(url) => images.push(url),
            Err(e) => {
                tracing::warn!(error = %e, "skipping undecodable upload");
                skipped += 1;
            }
        }
    }

    Ok(Json(UploadImagesResponse { images, skipped }))
}

/// Admin catalog routes mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/products", get(list_products).post(save_product))
        .route("/admin/products/{id}", delete(delete_product))
        .route("/admin/categories", get(list_categories))
        .route("/admin/images", post(upload_images))
}
