//! Admin analytics handlers: the click log and the dashboard summary.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::auth::require_admin;
use crate::api::dto::{ClickListResponse, StatsResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /admin/clicks` — The raw click log, newest first.
///
/// # Errors
///
/// Returns 401 without a valid session.
#[utoipa::path(
    get,
    path = "/api/v1/admin/clicks",
    tag = "Analytics",
    summary = "Click log",
    description = "All recorded buy-clicks with their traffic origin, newest first.",
    responses(
        (status = 200, description = "Click events", body = ClickListResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn list_clicks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;
    let data = state.catalog.clicks().await;
    let total = data.len();
    Ok(Json(ClickListResponse { data, total }))
}

/// `GET /admin/stats` — Aggregated dashboard summary.
///
/// # Errors
///
/// Returns 401 without a valid session.
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    tag = "Analytics",
    summary = "Dashboard summary",
    description = "Click totals, status counts, clicks by origin, and the most-clicked products.",
    responses(
        (status = 200, description = "Summary", body = StatsResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;
    Ok(Json(StatsResponse::from(state.catalog.stats().await)))
}

/// Analytics routes mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/clicks", get(list_clicks))
        .route("/admin/stats", get(stats))
}
