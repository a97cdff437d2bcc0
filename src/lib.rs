//! # deals-gateway
//!
//! REST gateway for a curated deals storefront with an admin back office.
//!
//! A public catalog browsing surface (search, category filters, product
//! detail, promotional carousel feed) is paired with an authenticated
//! admin area for product CRUD, click analytics, and JSON import/export
//! of the catalog. Images are normalized on upload and stored inline in
//! the product record; there is no blob store.
//!
//! ## Architecture
//!
//! ```text
//! Clients (storefront, admin UI)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── CatalogService / AuthService (service/)
//!     │
//!     ├── Domain computations (domain/)
//!     │     filter derivation, code generation, image normalization
//!     │
//!     └── CatalogStore → PostgreSQL (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
