//! Plain-text rendering of the catalog for the terminal.

use std::fmt::Write as _;

use catalogo_core::{CatalogDocument, Category, Product};

/// Render the header and the given categories of `doc`.
///
/// `categories` is usually the active list or a search result.
pub fn render_catalog(doc: &CatalogDocument, categories: &[Category]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", doc.title);
    let _ = writeln!(out, "{}", doc.subtitle);
    let _ = writeln!(out, "Season: {}", doc.season);

    if categories.is_empty() {
        let _ = writeln!(out, "\nNo products found.");
        return out;
    }

    for category in categories {
        let _ = writeln!(out, "\n[{}] {}", category.id, category.name);
        if category.products.is_empty() {
            let _ = writeln!(out, "  (no products)");
        }
        for product in &category.products {
            out.push_str(&render_product(product));
        }
    }
    out
}

fn render_product(product: &Product) -> String {
    let mut line = format!("  [{}] {} - {}", product.id, product.name, product.final_price());
    if product.has_discount() {
        let _ = write!(
            line,
            " (was {}, -{})",
            product.base_price,
            product.discount()
        );
    }
    let _ = writeln!(line);
    if !product.description.is_empty() {
        let _ = writeln!(line, "      {}", product.description);
    }
    line
}
