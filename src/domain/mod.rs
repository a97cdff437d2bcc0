//! Domain layer: catalog entities and the pure computations over them.
//!
//! Everything in this module is synchronous and store-agnostic; the
//! persistence and service layers feed it data and act on its results.

pub mod category;
pub mod click;
pub mod code;
pub mod filter;
pub mod image;
pub mod product;

pub use category::Category;
pub use click::{ClickEvent, DEFAULT_ORIGIN};
pub use code::generate_unique_code;
pub use filter::CatalogFilter;
pub use product::{Badge, Product, ProductDraft, ProductId, ProductStatus};
