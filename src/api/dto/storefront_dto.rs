//! Storefront DTOs: the browse view and the buy-click endpoint.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Category, Product};

/// Query parameters for `GET /storefront`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct StorefrontQuery {
    /// Free-text search term; matches title and description
    /// case-insensitively and the 5-digit code as a raw substring.
    pub q: Option<String>,
    /// Exact category name to filter by.
    pub category: Option<String>,
}

/// Response body for `GET /storefront`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StorefrontResponse {
    /// Visible products after search and category filtering, newest first.
    pub products: Vec<Product>,
    /// Highlighted carousel subset (at most 5, list order).
    pub carousel: Vec<Product>,
    /// All categories, name ascending.
    pub categories: Vec<Category>,
}

/// Query parameters for `POST /products/{id}/click`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ClickQuery {
    /// Traffic-origin label from the storefront URL; defaults to
    /// `"Direct"` when absent.
    pub utm_source: Option<String>,
}

/// Response body for `POST /products/{id}/click`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClickResponse {
    /// Affiliate link the storefront should open.
    pub link: String,
}
