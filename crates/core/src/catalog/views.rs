//! Derived views over a catalog document.
//!
//! These are recomputed on every read; nothing here is stored.

use super::document::{CatalogDocument, Category, Product};
use crate::types::Price;

/// Categories of the season on display.
#[must_use]
pub fn active_categories(doc: &CatalogDocument) -> &[Category] {
    doc.active()
}

/// Active-season categories narrowed to products whose name or description
/// contains `query`, ignoring case.
///
/// Categories left without products are dropped. An empty query returns the
/// full active list.
#[must_use]
pub fn filtered_categories(doc: &CatalogDocument, query: &str) -> Vec<Category> {
    if query.is_empty() {
        return active_categories(doc).to_vec();
    }

    let needle = query.to_lowercase();
    active_categories(doc)
        .iter()
        .filter_map(|category| {
            let products: Vec<Product> = category
                .products
                .iter()
                .filter(|p| p.matches(&needle))
                .cloned()
                .collect();
            (!products.is_empty()).then(|| Category {
                id: category.id.clone(),
                name: category.name.clone(),
                icon_url: category.icon_url.clone(),
                products,
            })
        })
        .collect()
}

/// Base price minus the product's discount.
#[must_use]
pub fn final_price(product: &Product) -> Price {
    product.final_price()
}
