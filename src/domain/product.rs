//! Product entity, lifecycle status, badges, and the typed draft used by
//! the admin save flow.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GatewayError;

/// Maximum number of inline images a product may carry.
pub const MAX_IMAGES: usize = 5;

/// Maximum number of products that may be highlighted for the carousel.
pub const MAX_HIGHLIGHTED: usize = 5;

/// Unique identifier for a catalog product.
///
/// Wraps a UUID v4. Generated once at product creation time and immutable
/// thereafter. Distinct from the 5-digit display [`Product::code`], which
/// is the search/display key shown to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductId(uuid::Uuid);

impl ProductId {
    /// Creates a new random `ProductId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `ProductId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for ProductId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ProductId> for uuid::Uuid {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Lifecycle status of a product. Only `active` products are visible on
/// the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible on the storefront.
    Active,
    /// Kept in the catalog but not shown to shoppers.
    Paused,
    /// Hidden everywhere except the admin product list.
    Hidden,
}

impl ProductStatus {
    /// Returns the canonical lowercase string stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Hidden => "hidden",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "hidden" => Ok(Self::Hidden),
            other => Err(GatewayError::InvalidRequest(format!(
                "unknown product status: {other}"
            ))),
        }
    }
}

/// Promotional badge shown on a product card.
///
/// The wire literals match the backup files produced by earlier versions
/// of the catalog, so exports stay importable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Badge {
    /// Staff pick.
    Top,
    /// A coupon applies to this deal.
    Cupom,
    /// General offer.
    Oferta,
    /// Short-lived lightning deal.
    Relampago,
}

impl Badge {
    /// Returns the canonical uppercase string stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Cupom => "CUPOM",
            Self::Oferta => "OFERTA",
            Self::Relampago => "RELAMPAGO",
        }
    }
}

impl FromStr for Badge {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TOP" => Ok(Self::Top),
            "CUPOM" => Ok(Self::Cupom),
            "OFERTA" => Ok(Self::Oferta),
            "RELAMPAGO" => Ok(Self::Relampago),
            other => Err(GatewayError::InvalidRequest(format!(
                "unknown badge: {other}"
            ))),
        }
    }
}

/// A catalog product as stored and as serialized in API responses and
/// export files.
///
/// Field names serialize in camelCase for round-trip fidelity with
/// existing catalog backup files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Internal record identifier.
    pub id: ProductId,
    /// 5-digit numeric display/search code, unique among active products.
    pub code: String,
    /// Product title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Category name. Advisory only; no foreign key is enforced.
    pub category: String,
    /// Current price.
    pub price: Decimal,
    /// Original price, shown struck through when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Decimal>,
    /// Affiliate link opened by the buy-click.
    pub link: String,
    /// Inline JPEG data URLs, at most [`MAX_IMAGES`].
    #[serde(default)]
    pub images: Vec<String>,
    /// Lifecycle status.
    pub status: ProductStatus,
    /// Promotional badges.
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Whether the product occupies one of the carousel slots.
    #[serde(default)]
    pub is_highlighted: bool,
    /// Creation timestamp; the storefront lists newest first.
    pub created_at: DateTime<Utc>,
    /// Buy-click counter. Incremented by a non-transactional
    /// read-modify-write, so concurrent clicks can lose increments.
    #[serde(default)]
    pub click_count: i64,
}

/// Partial product accumulated by the admin form before a save.
///
/// All fields are optional here; [`ProductDraft::build`] performs the
/// required-field checks and produces a complete [`Product`]. Validation
/// failures are reported before any store write is attempted.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Product title (required).
    pub title: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Category name (required).
    pub category: Option<String>,
    /// Current price (required).
    pub price: Option<Decimal>,
    /// Optional strikethrough price.
    pub old_price: Option<Decimal>,
    /// Affiliate link (required).
    pub link: Option<String>,
    /// Inline image data URLs, at most [`MAX_IMAGES`].
    #[serde(default)]
    pub images: Vec<String>,
    /// Lifecycle status; defaults to active.
    pub status: Option<ProductStatus>,
    /// Promotional badges.
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Carousel flag.
    #[serde(default)]
    pub is_highlighted: bool,
}

impl ProductDraft {
    /// Converts the draft into a complete [`Product`] using the supplied
    /// identity fields (which come from the existing record when editing,
    /// or are freshly generated for a new product).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingField`] when a required field is
    /// absent or blank, and [`GatewayError::TooManyImages`] when more
    /// than [`MAX_IMAGES`] images are attached.
    pub fn build(
        self,
        id: ProductId,
        code: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Result<Product, GatewayError> {
        let title = required(self.title, "title")?;
        let category = required(self.category, "category")?;
        let link = required(self.link, "link")?;
        let price = self.price.ok_or(GatewayError::MissingField("price"))?;

        if self.images.len() > MAX_IMAGES {
            return Err(GatewayError::TooManyImages(MAX_IMAGES));
        }

        Ok(Product {
            id,
            code,
            title,
            description: self.description.unwrap_or_default(),
            category,
            price,
            old_price: self.old_price,
            link,
            images: self.images,
            status: self.status.unwrap_or(ProductStatus::Active),
            badges: self.badges,
            is_highlighted: self.is_highlighted,
            created_at,
            click_count,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, GatewayError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GatewayError::MissingField(field)),
    }
}

/// Returns true when `candidate` may take a carousel slot given the
/// current product list.
///
/// The product being edited (if any) is excluded from the count so that
/// re-saving an already-highlighted product does not consume a second
/// slot. The check runs against the caller's snapshot of the list and is
/// not atomic with the subsequent write.
#[must_use]
pub fn highlight_slot_available(products: &[Product], editing: Option<ProductId>) -> bool {
    let taken = products
        .iter()
        .filter(|p| p.is_highlighted && editing != Some(p.id))
        .count();
    taken < MAX_HIGHLIGHTED
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: Some("Fone Bluetooth".to_string()),
            description: Some("Cancelamento de ruído".to_string()),
            category: Some("Eletrônicos".to_string()),
            price: Some(Decimal::new(9990, 2)),
            old_price: None,
            link: Some("https://example.com/deal".to_string()),
            images: vec![],
            status: None,
            badges: vec![Badge::Oferta],
            is_highlighted: false,
        }
    }

    fn product(id: ProductId, highlighted: bool) -> Product {
        let Ok(p) = ProductDraft {
            is_highlighted: highlighted,
            ..draft()
        }
        .build(id, "11111".to_string(), Utc::now(), 0) else {
            panic!("draft should build");
        };
        p
    }

    #[test]
    fn build_fills_defaults() {
        let id = ProductId::new();
        let Ok(p) = draft().build(id, "12345".to_string(), Utc::now(), 0) else {
            panic!("valid draft rejected");
        };
        assert_eq!(p.status, ProductStatus::Active);
        assert_eq!(p.code, "12345");
        assert_eq!(p.click_count, 0);
    }

    #[test]
    fn build_rejects_missing_title() {
        let d = ProductDraft {
            title: None,
            ..draft()
        };
        let err = d.build(ProductId::new(), "12345".to_string(), Utc::now(), 0);
        assert!(matches!(err, Err(GatewayError::MissingField("title"))));
    }

    #[test]
    fn build_rejects_blank_link() {
        let d = ProductDraft {
            link: Some("   ".to_string()),
            ..draft()
        };
        let err = d.build(ProductId::new(), "12345".to_string(), Utc::now(), 0);
        assert!(matches!(err, Err(GatewayError::MissingField("link"))));
    }

    #[test]
    fn build_rejects_missing_price() {
        let d = ProductDraft {
            price: None,
            ..draft()
        };
        let err = d.build(ProductId::new(), "12345".to_string(), Utc::now(), 0);
        assert!(matches!(err, Err(GatewayError::MissingField("price"))));
    }

    #[test]
    fn build_rejects_too_many_images() {
        let d = ProductDraft {
            images: vec!["data:image/jpeg;base64,AA==".to_string(); MAX_IMAGES + 1],
            ..draft()
        };
        let err = d.build(ProductId::new(), "12345".to_string(), Utc::now(), 0);
        assert!(matches!(err, Err(GatewayError::TooManyImages(_))));
    }

    #[test]
    fn sixth_highlight_is_rejected() {
        let products: Vec<Product> = (0..MAX_HIGHLIGHTED)
            .map(|_| product(ProductId::new(), true))
            .collect();
        assert!(!highlight_slot_available(&products, None));
    }

    #[test]
    fn editing_a_highlighted_product_keeps_its_slot() {
        let editing = ProductId::new();
        let mut products: Vec<Product> = (0..MAX_HIGHLIGHTED - 1)
            .map(|_| product(ProductId::new(), true))
            .collect();
        products.push(product(editing, true));
        assert!(highlight_slot_available(&products, Some(editing)));
        assert!(!highlight_slot_available(&products, None));
    }

    #[test]
    fn product_serializes_camel_case() {
        let p = product(ProductId::new(), false);
        let Ok(json) = serde_json::to_value(&p) else {
            panic!("serialization failed");
        };
        assert!(json.get("isHighlighted").is_some());
        assert!(json.get("clickCount").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("oldPrice").is_none()); // skipped when absent
    }

    #[test]
    fn status_and_badge_round_trip_as_strings() {
        for s in [
            ProductStatus::Active,
            ProductStatus::Paused,
            ProductStatus::Hidden,
        ] {
            assert_eq!(ProductStatus::from_str(s.as_str()).ok(), Some(s));
        }
        for b in [Badge::Top, Badge::Cupom, Badge::Oferta, Badge::Relampago] {
            assert_eq!(Badge::from_str(b.as_str()).ok(), Some(b));
        }
    }
}
