//! Import/export handlers for catalog backups.

use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use super::auth::require_admin;
use crate::api::dto::{CatalogBackup, ImportReport};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /admin/export` — Download the catalog as a JSON backup.
///
/// The attachment filename embeds the export date. Consumers must keep
/// all product and category fields verbatim for round-trip fidelity.
///
/// # Errors
///
/// Returns 401 without a valid session.
#[utoipa::path(
    get,
    path = "/api/v1/admin/export",
    tag = "Transfer",
    summary = "Export the catalog",
    description = "Full products-and-categories backup with a version label.",
    responses(
        (status = 200, description = "Catalog backup file", body = CatalogBackup),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn export(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;

    let backup = CatalogBackup {
        products: state.catalog.all_products().await,
        categories: state.catalog.all_categories().await,
        version: state.export_version.clone(),
    };

    let filename = format!("deals_backup_{}.json", Utc::now().format("%d-%m-%Y"));
    let disposition = format!("attachment; filename=\"{filename}\"");

    Ok((
        [(header::CONTENT_DISPOSITION, disposition)],
        Json(backup),
    ))
}

/// `POST /admin/import` — Restore a catalog backup.
///
/// Every product entry is upserted individually, then the categories. A
/// failed entry does not stop the rest, and there is no rollback: the
/// report is produced only after all entries have been attempted, so
/// the operator sees every partial failure at once.
///
/// # Errors
///
/// Returns 400 when the body is not a valid backup file and 401 without
/// a valid session.
#[utoipa::path(
    post,
    path = "/api/v1/admin/import",
    tag = "Transfer",
    summary = "Import a catalog backup",
    description = "Upserts each product entry individually; partial success is reported per entry.",
    request_body = CatalogBackup,
    responses(
        (status = 200, description = "Import attempted for every entry", body = ImportReport),
        (status = 400, description = "Not a valid backup file", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn import(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, GatewayError> {
    require_admin(&state, &headers).await?;

    let backup: CatalogBackup = serde_json::from_str(&body)
        .map_err(|e| GatewayError::InvalidImportFile(e.to_string()))?;

    let outcome = state
        .catalog
        .import(backup.products, backup.categories)
        .await;

    Ok(Json(ImportReport::from(outcome)))
}

/// Transfer routes mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/export", get(export))
        .route("/admin/import", post(import))
}
