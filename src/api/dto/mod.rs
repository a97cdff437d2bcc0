//! Data Transfer Objects for REST request/response serialization.
//!
//! Response field names are camelCase throughout, matching the catalog
//! backup format so export files round-trip across versions.

pub mod analytics_dto;
pub mod auth_dto;
pub mod product_dto;
pub mod storefront_dto;
pub mod transfer_dto;

pub use analytics_dto::*;
pub use auth_dto::*;
pub use product_dto::*;
pub use storefront_dto::*;
pub use transfer_dto::*;
