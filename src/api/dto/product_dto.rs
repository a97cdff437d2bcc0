//! Product DTOs for the admin CRUD and image upload endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::{Product, ProductDraft, ProductId};

/// Request body for `POST /admin/products`.
///
/// With `id` absent a new product is created (code, timestamps, and the
/// click counter are generated server-side); with `id` present the
/// existing product is updated and keeps those identity fields.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveProductRequest {
    /// Product to edit; omit to create a new one.
    pub id: Option<ProductId>,
    /// The product form fields.
    #[serde(flatten)]
    pub draft: ProductDraft,
}

/// Response body for `POST /admin/products` (200 OK).
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveProductResponse {
    /// The saved product as persisted.
    pub product: Product,
}

/// Response body for `GET /admin/products`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    /// All products, newest first.
    pub data: Vec<Product>,
    /// Total number of products.
    pub total: usize,
}

/// Response body for `POST /admin/images`.
///
/// Files that failed to decode are skipped individually; the rest of
/// the batch is still processed.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadImagesResponse {
    /// Normalized inline JPEG data URLs, in upload order.
    pub images: Vec<String>,
    /// Number of files skipped because they could not be decoded.
    pub skipped: usize,
}
