//! Import/export DTOs: the catalog backup file format.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, Product};
use crate::service::catalog_service::ImportOutcome;

/// A catalog backup file: the export payload and the import input.
///
/// Consumers must preserve all product and category fields verbatim for
/// round-trip fidelity.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogBackup {
    /// Every product in the catalog.
    pub products: Vec<Product>,
    /// Every category.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Format version label.
    pub version: String,
}

/// One failed entry in an import.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImportFailure {
    /// Zero-based index of the product entry in the backup file.
    pub index: usize,
    /// Error message for this entry.
    pub error: String,
}

/// Response body for `POST /admin/import`, produced only after every
/// entry has been attempted.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImportReport {
    /// Number of product entries attempted.
    pub attempted: usize,
    /// Number of product entries upserted successfully.
    pub imported: usize,
    /// Entries that failed; the rest were still attempted.
    pub failures: Vec<ImportFailure>,
}

impl From<ImportOutcome> for ImportReport {
    fn from(outcome: ImportOutcome) -> Self {
        Self {
            attempted: outcome.attempted,
            imported: outcome.imported,
            failures: outcome
                .failures
                .into_iter()
                .map(|(index, error)| ImportFailure { index, error })
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::product::{Badge, ProductDraft, ProductId, ProductStatus};

    fn product() -> Product {
        let Ok(p) = ProductDraft {
            title: Some("Air Fryer 5L".to_string()),
            description: Some("Fritadeira sem óleo".to_string()),
            category: Some("Casa".to_string()),
            price: Some(Decimal::new(29990, 2)),
            old_price: Some(Decimal::new(39990, 2)),
            link: Some("https://example.com/airfryer".to_string()),
            images: vec!["data:image/jpeg;base64,AA==".to_string()],
            status: Some(ProductStatus::Active),
            badges: vec![Badge::Oferta, Badge::Relampago],
            is_highlighted: true,
        }
        .build(ProductId::new(), "54321".to_string(), Utc::now(), 12) else {
            panic!("draft should build");
        };
        p
    }

    #[test]
    fn backup_round_trips_products_and_categories() {
        let backup = CatalogBackup {
            products: vec![product()],
            categories: vec![Category {
                id: uuid::Uuid::new_v4(),
                name: "Casa".to_string(),
                product_count: 1,
            }],
            version: "1.2".to_string(),
        };

        let Ok(json) = serde_json::to_string(&backup) else {
            panic!("serialization failed");
        };
        let Ok(restored) = serde_json::from_str::<CatalogBackup>(&json) else {
            panic!("deserialization failed");
        };

        assert_eq!(restored.version, backup.version);
        assert_eq!(restored.products, backup.products);
        assert_eq!(restored.categories, backup.categories);
    }

    #[test]
    fn backup_without_categories_still_parses() {
        let input = r#"{"products":[],"version":"1.2"}"#;
        let Ok(backup) = serde_json::from_str::<CatalogBackup>(input) else {
            panic!("minimal backup rejected");
        };
        assert!(backup.categories.is_empty());
    }
}
