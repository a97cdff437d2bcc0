//! Public storefront handlers: the browse view and the buy-click.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{ClickQuery, ClickResponse, StorefrontQuery, StorefrontResponse};
use crate::app_state::AppState;
use crate::domain::CatalogFilter;
use crate::domain::product::ProductId;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /storefront` — The public browse view.
///
/// Returns active products filtered by the search term and category,
/// the highlighted carousel subset, and the category list. A failed
/// read behind this endpoint degrades to empty collections rather than
/// an error response.
#[utoipa::path(
    get,
    path = "/api/v1/storefront",
    tag = "Storefront",
    summary = "Browse the catalog",
    description = "Active products filtered by free-text search and category, plus the carousel subset and category list.",
    params(StorefrontQuery),
    responses(
        (status = 200, description = "Storefront view", body = StorefrontResponse),
    )
)]
pub async fn storefront(
    State(state): State<AppState>,
    Query(query): Query<StorefrontQuery>,
) -> impl IntoResponse {
    let filter = CatalogFilter {
        term: query.q,
        category: query.category,
    };
    let view = state.catalog.storefront(&filter).await;
    Json(StorefrontResponse {
        products: view.products,
        carousel: view.carousel,
        categories: view.categories,
    })
}

/// `POST /products/{id}/click` — Record a buy-click.
///
/// Captures the `utm_source` traffic-origin label (defaulting to
/// `"Direct"`), records the click, bumps the product's click counter,
/// and returns the affiliate link for the storefront to open.
///
/// # Errors
///
/// Returns [`GatewayError::ProductNotFound`] for an unknown product.
#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/click",
    tag = "Storefront",
    summary = "Record a buy-click",
    description = "Logs a click event with its traffic origin and returns the affiliate link.",
    params(
        ("id" = uuid::Uuid, Path, description = "Product UUID"),
        ClickQuery,
    ),
    responses(
        (status = 200, description = "Click recorded", body = ClickResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn record_click(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Query(query): Query<ClickQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let link = state
        .catalog
        .record_click(ProductId::from_uuid(id), query.utm_source)
        .await?;
    Ok(Json(ClickResponse { link }))
}

/// Storefront routes mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/storefront", get(storefront))
        .route("/products/{id}/click", post(record_click))
}
