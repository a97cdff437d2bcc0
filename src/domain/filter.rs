//! Storefront filter derivation: free-text search, category selection,
//! and the highlighted-carousel subset.

use super::product::{MAX_HIGHLIGHTED, Product};

/// Storefront view filter: an optional free-text search term plus an
/// optional exact category selection.
///
/// An empty or absent term matches everything, so clearing both fields
/// restores the full unfiltered list.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Free-text search term.
    pub term: Option<String>,
    /// Selected category name; `None` means all categories.
    pub category: Option<String>,
}

impl CatalogFilter {
    /// Returns true when `product` is in the visible set for this filter.
    ///
    /// The term matches case-insensitively as a substring of the title
    /// or description, and case-sensitively as a substring of the
    /// 5-digit code. The category must match exactly when selected. The
    /// visible set is the intersection of both predicates.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_term = match self.term.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let lowered = term.to_lowercase();
                product.title.to_lowercase().contains(&lowered)
                    || product.description.to_lowercase().contains(&lowered)
                    || product.code.contains(term)
            }
        };
        let matches_category = match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => product.category == category,
        };
        matches_term && matches_category
    }

    /// Applies the filter to `products`, preserving their order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Returns the carousel subset: highlighted products truncated to the
/// first [`MAX_HIGHLIGHTED`] in current list order. No secondary sort;
/// order is whatever the store returned (created_at descending).
#[must_use]
pub fn highlighted_carousel(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.is_highlighted)
        .take(MAX_HIGHLIGHTED)
        .collect()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::product::{ProductDraft, ProductId, ProductStatus};

    fn product(code: &str, title: &str, description: &str, category: &str) -> Product {
        let Ok(p) = ProductDraft {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            category: Some(category.to_string()),
            price: Some(Decimal::new(4990, 2)),
            link: Some("https://example.com/deal".to_string()),
            status: Some(ProductStatus::Active),
            ..ProductDraft::default()
        }
        .build(ProductId::new(), code.to_string(), Utc::now(), 0) else {
            panic!("draft should build");
        };
        p
    }

    fn sample() -> Vec<Product> {
        vec![
            product("11111", "Fone Bluetooth", "Cancelamento de ruído", "Eletrônicos"),
            product("22222", "Mouse Gamer", "RGB 16000 DPI", "Periféricos"),
        ]
    }

    #[test]
    fn term_matches_title_case_insensitively() {
        let products = sample();
        let filter = CatalogFilter {
            term: Some("fone".to_string()),
            category: None,
        };
        let visible = filter.apply(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().map(|p| p.code.as_str()), Some("11111"));
    }

    #[test]
    fn term_matches_code_substring() {
        let products = sample();
        let filter = CatalogFilter {
            term: Some("22222".to_string()),
            category: None,
        };
        let visible = filter.apply(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().map(|p| p.code.as_str()), Some("22222"));
    }

    #[test]
    fn term_matches_description() {
        let products = sample();
        let filter = CatalogFilter {
            term: Some("rgb".to_string()),
            category: None,
        };
        assert_eq!(filter.apply(&products).len(), 1);
    }

    #[test]
    fn category_must_match_exactly() {
        let products = sample();
        let filter = CatalogFilter {
            term: None,
            category: Some("Periféricos".to_string()),
        };
        let visible = filter.apply(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().map(|p| p.category.as_str()), Some("Periféricos"));
    }

    #[test]
    fn result_is_a_subset_satisfying_the_predicate() {
        let products = sample();
        let filter = CatalogFilter {
            term: Some("e".to_string()),
            category: None,
        };
        for p in filter.apply(&products) {
            assert!(filter.matches(p));
            assert!(products.iter().any(|orig| orig.id == p.id));
        }
    }

    #[test]
    fn clearing_filters_restores_full_set() {
        let products = sample();
        let selected = CatalogFilter {
            term: None,
            category: Some("Eletrônicos".to_string()),
        };
        assert_eq!(selected.apply(&products).len(), 1);
        let cleared = CatalogFilter::default();
        assert_eq!(cleared.apply(&products).len(), products.len());
    }

    #[test]
    fn carousel_truncates_to_five_in_list_order() {
        let mut products: Vec<Product> = (0..8)
            .map(|i| {
                let mut p = product(&format!("1000{i}"), &format!("Item {i}"), "", "Casa");
                p.is_highlighted = true;
                p
            })
            .collect();
        products.push(product("99999", "Not highlighted", "", "Casa"));

        let carousel = highlighted_carousel(&products);
        assert_eq!(carousel.len(), MAX_HIGHLIGHTED);
        assert_eq!(carousel.first().map(|p| p.title.as_str()), Some("Item 0"));
        assert!(carousel.iter().all(|p| p.is_highlighted));
    }
}
