//! Persistence layer: the catalog's remote-store facade.
//!
//! One method per remote operation, each a single round trip against
//! PostgreSQL through `sqlx::PgPool`. No retries, no local caching, no
//! cross-row transactions: consistency is whatever the store offers for
//! single-row operations.

pub mod models;
pub mod postgres;

pub use postgres::CatalogStore;
