//! Buy-click events recorded for the admin analytics view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::product::ProductId;

/// Origin label recorded when the storefront URL carries no
/// `utm_source` parameter.
pub const DEFAULT_ORIGIN: &str = "Direct";

/// A single buy-click on a product.
///
/// `product_id` is a plain reference with no cascade: deleting the
/// product leaves its click rows behind, and the analytics view renders
/// those as removed products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    /// Internal record identifier.
    pub id: uuid::Uuid,
    /// Product that was clicked.
    pub product_id: ProductId,
    /// Traffic-origin label captured from the storefront URL.
    pub origin: String,
    /// When the click happened.
    pub timestamp: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a click event for `product_id` stamped with the current
    /// time. A missing or empty origin falls back to [`DEFAULT_ORIGIN`].
    #[must_use]
    pub fn record(product_id: ProductId, origin: Option<String>) -> Self {
        let origin = origin
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        Self {
            id: uuid::Uuid::new_v4(),
            product_id,
            origin,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn missing_origin_defaults_to_direct() {
        let click = ClickEvent::record(ProductId::new(), None);
        assert_eq!(click.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn blank_origin_defaults_to_direct() {
        let click = ClickEvent::record(ProductId::new(), Some("  ".to_string()));
        assert_eq!(click.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn utm_origin_is_preserved() {
        let click = ClickEvent::record(ProductId::new(), Some("instagram".to_string()));
        assert_eq!(click.origin, "instagram");
    }
}
