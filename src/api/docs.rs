//! OpenAPI document for the gateway, served through Swagger UI when the
//! `swagger-ui` feature is enabled.

use utoipa::OpenApi;

use super::{dto, handlers};
use crate::domain::product::{Badge, Product, ProductDraft, ProductId, ProductStatus};
use crate::domain::{Category, ClickEvent};
use crate::error::{ErrorBody, ErrorResponse};

/// Aggregated OpenAPI specification for all REST endpoints.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::system::health_handler,
        handlers::storefront::storefront,
        handlers::storefront::record_click,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::session,
        handlers::products::list_products,
        handlers::products::save_product,
        handlers::products::delete_product,
        handlers::products::list_categories,
        handlers::products::upload_images,
        handlers::analytics::list_clicks,
        handlers::analytics::stats,
        handlers::transfer::export,
        handlers::transfer::import,
    ),
    components(schemas(
        Product,
        ProductDraft,
        ProductId,
        ProductStatus,
        Badge,
        Category,
        ClickEvent,
        ErrorResponse,
        ErrorBody,
        dto::SaveProductRequest,
        dto::SaveProductResponse,
        dto::ProductListResponse,
        dto::UploadImagesResponse,
        dto::StorefrontResponse,
        dto::ClickResponse,
        dto::ClickListResponse,
        dto::StatsResponse,
        dto::CatalogBackup,
        dto::ImportFailure,
        dto::ImportReport,
        dto::LoginRequest,
        dto::SessionResponse,
    )),
    tags(
        (name = "System", description = "Health and metadata"),
        (name = "Storefront", description = "Public catalog browsing and buy-clicks"),
        (name = "Auth", description = "Admin authentication"),
        (name = "Admin", description = "Product and category management"),
        (name = "Analytics", description = "Click log and dashboard summary"),
        (name = "Transfer", description = "Catalog backup import/export"),
    ),
    info(
        title = "deals-gateway API",
        description = "REST gateway for a curated deals storefront with an admin back office",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_mounted_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/storefront",
            "/api/v1/products/{id}/click",
            "/api/v1/auth/login",
            "/api/v1/admin/products",
            "/api/v1/admin/images",
            "/api/v1/admin/stats",
            "/api/v1/admin/export",
            "/api/v1/admin/import",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path: {path}");
        }
        assert_eq!(format!("{ApiDoc:?}"), "ApiDoc");
    }
}
