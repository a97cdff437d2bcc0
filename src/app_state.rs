//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{AuthService, CatalogService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog service for storefront and admin operations.
    pub catalog: Arc<CatalogService>,
    /// Authentication service for the admin area.
    pub auth: Arc<AuthService>,
    /// Version label stamped into catalog export files.
    pub export_version: String,
}
