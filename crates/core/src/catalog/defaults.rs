//! Built-in catalog used when nothing has been saved yet.

use super::document::{CatalogDocument, Category, Product};
use crate::types::{CategoryId, DiscountPercent, Price, ProductId, Season};

/// Name given to a newly added category.
pub const NEW_CATEGORY_NAME: &str = "NUEVA CATEGORÍA";
/// Icon given to a newly added category.
pub const DEFAULT_CATEGORY_ICON: &str = "https://cdn-icons-png.flaticon.com/512/2917/2917242.png";
/// Name given to a newly added product.
pub const NEW_PRODUCT_NAME: &str = "Nuevo Producto";
/// Description given to a newly added product.
pub const NEW_PRODUCT_DESCRIPTION: &str = "Descripción breve del producto...";
/// Image given to a newly added product.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=500&fit=crop";

impl Default for CatalogDocument {
    fn default() -> Self {
        Self {
            season: Season::Winter,
            contact_number: "51999888777".to_owned(),
            cta_label: "Pedir por WhatsApp".to_owned(),
            cta_color: "#25D366".to_owned(),
            logo_url: "https://cdn-icons-png.flaticon.com/512/6103/6103079.png".to_owned(),
            title: "MI CATÁLOGO PRO".to_owned(),
            subtitle: "Calidad y exclusividad en cada detalle".to_owned(),
            winter: vec![
                Category::new(
                    CategoryId::new("w1"),
                    "EDREDONES",
                    "https://cdn-icons-png.flaticon.com/512/2917/2917242.png",
                )
                .with_products(vec![
                    Product::new(
                        ProductId::new("p1"),
                        "Edredón Premium King",
                        "Máxima suavidad y confort para noches perfectas",
                        Price::from(250),
                        "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?w=400&h=500&fit=crop",
                    )
                    .with_discount(DiscountPercent::new(15)),
                    Product::new(
                        ProductId::new("p2"),
                        "Edredón Nórdico",
                        "Ideal para clima frío, relleno de plumas",
                        Price::from(320),
                        "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?w=400&h=500&fit=crop",
                    )
                    .with_discount(DiscountPercent::new(20)),
                ]),
                Category::new(
                    CategoryId::new("w2"),
                    "COBIJAS",
                    "https://cdn-icons-png.flaticon.com/512/2917/2917331.png",
                )
                .with_products(vec![Product::new(
                    ProductId::new("p3"),
                    "Cobija Polar XL",
                    "Extra cálida, perfecta para invierno",
                    Price::from(120),
                    "https://images.unsplash.com/photo-1608532848419-0ecb3b2846d5?w=400&h=500&fit=crop",
                )]),
            ],
            summer: vec![
                Category::new(
                    CategoryId::new("s1"),
                    "SÁBANAS",
                    "https://cdn-icons-png.flaticon.com/512/2912/2912810.png",
                )
                .with_products(vec![
                    Product::new(
                        ProductId::new("p4"),
                        "Sábanas de Algodón",
                        "Frescas y transpirables para verano",
                        Price::from(80),
                        "https://images.unsplash.com/photo-1616594039964-ae9021a400a0?w=400&h=500&fit=crop",
                    )
                    .with_discount(DiscountPercent::new(10)),
                ]),
            ],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let doc = CatalogDocument::default();
        assert_eq!(doc.season, Season::Winter);
        assert_eq!(doc.winter.len(), 2);
        assert_eq!(doc.summer.len(), 1);
        assert_eq!(doc.winter.first().unwrap().products.len(), 2);
    }

    #[test]
    fn test_default_discount_flags_match_percentages() {
        let doc = CatalogDocument::default();
        for product in doc.winter.iter().chain(&doc.summer).flat_map(|c| &c.products) {
            assert_eq!(product.has_discount(), product.discount().is_active());
        }
    }

    #[test]
    fn test_placeholders() {
        let category = Category::placeholder(CategoryId::new("cat_1"));
        assert_eq!(category.name, NEW_CATEGORY_NAME);
        assert_eq!(category.icon_url, DEFAULT_CATEGORY_ICON);
        assert!(category.products.is_empty());

        let product = Product::placeholder(ProductId::new("prod_1"));
        assert_eq!(product.name, NEW_PRODUCT_NAME);
        assert_eq!(product.base_price, Price::ZERO);
        assert!(!product.has_discount());
    }
}
