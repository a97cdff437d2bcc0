//! Category entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog category.
///
/// Products reference categories by name only; nothing enforces that the
/// name exists here, and `product_count` is a denormalized advisory value
/// no code path keeps in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Internal record identifier.
    pub id: uuid::Uuid,
    /// Display name, unique by convention.
    pub name: String,
    /// Advisory product count.
    #[serde(default)]
    pub product_count: i64,
}
