//! REST endpoint handlers organized by resource.

pub mod analytics;
pub mod auth;
pub mod products;
pub mod storefront;
pub mod system;
pub mod transfer;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(storefront::routes())
        .merge(products::routes())
        .merge(analytics::routes())
        .merge(transfer::routes())
        .merge(auth::routes())
}
