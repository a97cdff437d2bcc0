//! Analytics DTOs for the admin click report and dashboard summary.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ClickEvent, Product};
use crate::service::catalog_service::CatalogStats;

/// Response body for `GET /admin/clicks`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClickListResponse {
    /// Click events, newest first.
    pub data: Vec<ClickEvent>,
    /// Total number of recorded clicks.
    pub total: usize,
}

/// Response body for `GET /admin/stats`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Total recorded clicks.
    pub total_clicks: usize,
    /// Number of active products.
    pub active_products: usize,
    /// Number of paused products.
    pub paused_products: usize,
    /// Click totals keyed by traffic-origin label.
    pub clicks_by_origin: HashMap<String, usize>,
    /// Up to 5 products with the highest click counters.
    pub most_clicked_products: Vec<Product>,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total_clicks: stats.total_clicks,
            active_products: stats.active_products,
            paused_products: stats.paused_products,
            clicks_by_origin: stats.clicks_by_origin,
            most_clicked_products: stats.most_clicked,
        }
    }
}
