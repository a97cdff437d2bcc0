//! Service layer: orchestration between the REST handlers and the store.

pub mod auth_service;
pub mod catalog_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
