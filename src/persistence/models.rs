//! Database row models and their conversions into domain types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::product::{Badge, Product, ProductId, ProductStatus};
use crate::domain::{Category, ClickEvent};
use crate::error::GatewayError;

/// A product row from the `products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    /// Primary key.
    pub id: Uuid,
    /// 5-digit display code.
    pub code: String,
    /// Product title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Category name (advisory reference).
    pub category: String,
    /// Current price.
    pub price: Decimal,
    /// Optional strikethrough price.
    pub old_price: Option<Decimal>,
    /// Affiliate link.
    pub link: String,
    /// Inline image data URLs.
    pub images: Vec<String>,
    /// Lifecycle status string.
    pub status: String,
    /// Badge strings.
    pub badges: Vec<String>,
    /// Carousel flag.
    pub is_highlighted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Buy-click counter.
    pub click_count: i64,
}

impl ProductRow {
    /// Converts the row into a domain [`Product`].
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the stored status or a badge
    /// string is not a recognized value.
    pub fn into_domain(self) -> Result<Product, GatewayError> {
        let status = ProductStatus::from_str(&self.status)?;
        let badges = self
            .badges
            .iter()
            .map(|b| Badge::from_str(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Product {
            id: ProductId::from_uuid(self.id),
            code: self.code,
            title: self.title,
            description: self.description,
            category: self.category,
            price: self.price,
            old_price: self.old_price,
            link: self.link,
            images: self.images,
            status,
            badges,
            is_highlighted: self.is_highlighted,
            created_at: self.created_at,
            click_count: self.click_count,
        })
    }
}

/// A category row from the `categories` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRow {
    /// Primary key.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Advisory product count.
    pub product_count: i64,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            product_count: row.product_count,
        }
    }
}

/// A click row from the `clicks` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClickRow {
    /// Primary key.
    pub id: Uuid,
    /// Clicked product (no cascade on deletion).
    pub product_id: Uuid,
    /// Traffic-origin label.
    pub origin: String,
    /// When the click happened.
    pub clicked_at: DateTime<Utc>,
}

impl From<ClickRow> for ClickEvent {
    fn from(row: ClickRow) -> Self {
        Self {
            id: row.id,
            product_id: ProductId::from_uuid(row.product_id),
            origin: row.origin,
            timestamp: row.clicked_at,
        }
    }
}

/// An admin user row from the `admin_users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminUserRow {
    /// Primary key.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Hex-encoded SHA-256 digest of the password.
    pub password_digest: String,
}

/// A session row from the `sessions` table, joined with the owning
/// admin's email.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionRow {
    /// Opaque bearer token handed to the client.
    pub token: Uuid,
    /// Owning admin user.
    pub admin_id: Uuid,
    /// Owning admin's email.
    pub email: String,
    /// Expiry timestamp; rows past this moment are treated as absent.
    pub expires_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
