//! Catalog document types.
//!
//! Field names on the wire match the catalog files written by the web
//! catalog (`whatsapp`, `wsText`, `basePrice`, `thumb`, ...), so existing
//! saved catalogs load unchanged.

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_CATEGORY_ICON, DEFAULT_PRODUCT_IMAGE, NEW_CATEGORY_NAME, NEW_PRODUCT_DESCRIPTION,
    NEW_PRODUCT_NAME,
};
use crate::types::{CategoryId, DiscountPercent, Price, ProductId, Season};

/// The whole catalog: global settings plus one category list per season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Season currently on display.
    pub season: Season,
    /// Messaging contact number that inquiry links point at.
    #[serde(rename = "whatsapp")]
    pub contact_number: String,
    /// Call-to-action button label.
    #[serde(rename = "wsText")]
    pub cta_label: String,
    /// Call-to-action button color (CSS color string).
    #[serde(rename = "wsColor")]
    pub cta_color: String,
    #[serde(rename = "logo")]
    pub logo_url: String,
    pub title: String,
    pub subtitle: String,
    pub winter: Vec<Category>,
    pub summer: Vec<Category>,
}

/// A named group of products within one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(rename = "icon")]
    pub icon_url: String,
    pub products: Vec<Product>,
}

/// A sellable item.
///
/// The discount percentage and the `hasDiscount` flag are private and only
/// change together through [`Product::with_discount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(rename = "basePrice")]
    pub base_price: Price,
    #[serde(rename = "hasDiscount")]
    has_discount: bool,
    #[serde(rename = "discountValue")]
    discount: DiscountPercent,
    #[serde(rename = "thumb")]
    pub image_url: String,
}

impl CatalogDocument {
    /// Categories of the given season.
    #[must_use]
    pub fn categories(&self, season: Season) -> &[Category] {
        match season {
            Season::Winter => &self.winter,
            Season::Summer => &self.summer,
        }
    }

    /// Categories of the season on display.
    #[must_use]
    pub fn active(&self) -> &[Category] {
        self.categories(self.season)
    }

    /// Find a category of the active season.
    #[must_use]
    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        self.active().iter().find(|c| &c.id == id)
    }

    /// Find a product inside a category of the active season.
    #[must_use]
    pub fn find_product(&self, category_id: &CategoryId, product_id: &ProductId) -> Option<&Product> {
        self.find_category(category_id)?
            .products
            .iter()
            .find(|p| &p.id == product_id)
    }

    /// Whether any season already uses this category ID.
    #[must_use]
    pub fn contains_category_id(&self, id: &CategoryId) -> bool {
        Season::ALL
            .iter()
            .flat_map(|season| self.categories(*season))
            .any(|c| &c.id == id)
    }

    /// Whether any category of any season already uses this product ID.
    #[must_use]
    pub fn contains_product_id(&self, id: &ProductId) -> bool {
        Season::ALL
            .iter()
            .flat_map(|season| self.categories(*season))
            .flat_map(|c| &c.products)
            .any(|p| &p.id == id)
    }

    /// Copy of the document with the active season's list replaced.
    pub(crate) fn with_active(&self, categories: Vec<Category>) -> Self {
        let (winter, summer) = match self.season {
            Season::Winter => (categories, self.summer.clone()),
            Season::Summer => (self.winter.clone(), categories),
        };
        Self {
            season: self.season,
            contact_number: self.contact_number.clone(),
            cta_label: self.cta_label.clone(),
            cta_color: self.cta_color.clone(),
            logo_url: self.logo_url.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            winter,
            summer,
        }
    }

    /// Copy of the document with one active-season category rebuilt by `f`.
    ///
    /// Unknown IDs yield an unchanged copy.
    pub(crate) fn with_category(&self, id: &CategoryId, f: impl Fn(&Category) -> Category) -> Self {
        if self.find_category(id).is_none() {
            return self.clone();
        }
        self.with_active(
            self.active()
                .iter()
                .map(|c| if &c.id == id { f(c) } else { c.clone() })
                .collect(),
        )
    }

    /// Copy of the document with one product rebuilt by `f`.
    pub(crate) fn with_product(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
        f: impl Fn(&Product) -> Product,
    ) -> Self {
        self.with_category(category_id, |category| Category {
            products: category
                .products
                .iter()
                .map(|p| if &p.id == product_id { f(p) } else { p.clone() })
                .collect(),
            ..category.clone()
        })
    }
}

impl Category {
    /// Create an empty category.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, icon_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon_url: icon_url.into(),
            products: Vec::new(),
        }
    }

    /// A freshly added category awaiting its real name.
    #[must_use]
    pub fn placeholder(id: CategoryId) -> Self {
        Self::new(id, NEW_CATEGORY_NAME, DEFAULT_CATEGORY_ICON)
    }

    /// Builder-style helper to attach products.
    #[must_use]
    pub fn with_products(self, products: Vec<Product>) -> Self {
        Self { products, ..self }
    }
}

impl Product {
    /// Create a product without discount.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        base_price: Price,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            base_price,
            has_discount: false,
            discount: DiscountPercent::NONE,
            image_url: image_url.into(),
        }
    }

    /// A freshly added product with placeholder text and a zero price.
    #[must_use]
    pub fn placeholder(id: ProductId) -> Self {
        Self::new(
            id,
            NEW_PRODUCT_NAME,
            NEW_PRODUCT_DESCRIPTION,
            Price::ZERO,
            DEFAULT_PRODUCT_IMAGE,
        )
    }

    /// Copy with the discount set; `hasDiscount` follows the percentage.
    #[must_use]
    pub fn with_discount(&self, discount: DiscountPercent) -> Self {
        Self {
            has_discount: discount.is_active(),
            discount,
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn discount(&self) -> DiscountPercent {
        self.discount
    }

    #[must_use]
    pub const fn has_discount(&self) -> bool {
        self.has_discount
    }

    /// Base price after discount.
    #[must_use]
    pub fn final_price(&self) -> Price {
        self.base_price.discounted(self.discount)
    }

    /// Case-insensitive match of an already lowercased needle against name
    /// and description.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_with_discount_keeps_flag_consistent() {
        let product = Product::placeholder(ProductId::new("p"));
        assert!(!product.has_discount());

        let discounted = product.with_discount(DiscountPercent::new(10));
        assert!(discounted.has_discount());
        assert_eq!(discounted.discount().value(), 10);

        let cleared = discounted.with_discount(DiscountPercent::NONE);
        assert!(!cleared.has_discount());
    }

    #[test]
    fn test_product_wire_format() {
        let product = Product::new(
            ProductId::new("p9"),
            "Almohada",
            "Viscoelástica",
            Price::from(45),
            "https://img/almohada.jpg",
        )
        .with_discount(DiscountPercent::new(5));
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], "p9");
        assert_eq!(json["basePrice"], "45");
        assert_eq!(json["hasDiscount"], true);
        assert_eq!(json["discountValue"], 5);
        assert_eq!(json["thumb"], "https://img/almohada.jpg");
    }

    #[test]
    fn test_reads_documents_with_numeric_prices() {
        let raw = r##"{
            "season": "summer",
            "whatsapp": "51911222333",
            "wsText": "Pedir",
            "wsColor": "#000000",
            "logo": "logo.png",
            "title": "T",
            "subtitle": "S",
            "winter": [],
            "summer": [{
                "id": "s1",
                "name": "SÁBANAS",
                "icon": "icon.png",
                "products": [{
                    "id": "p4",
                    "name": "Sábanas de Algodón",
                    "description": "Frescas",
                    "basePrice": 80.5,
                    "hasDiscount": true,
                    "discountValue": 10,
                    "thumb": "thumb.jpg"
                }]
            }]
        }"##;
        let doc: CatalogDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.season, Season::Summer);

        let product = doc
            .find_product(&CategoryId::new("s1"), &ProductId::new("p4"))
            .unwrap();
        assert_eq!(product.base_price.amount(), Decimal::new(805, 1));
        assert_eq!(product.discount().value(), 10);
    }

    #[test]
    fn test_lookups_are_scoped_to_active_season() {
        let doc = CatalogDocument::default();
        assert!(doc.find_category(&CategoryId::new("w1")).is_some());
        assert!(doc.find_category(&CategoryId::new("s1")).is_none());
        assert!(doc.contains_category_id(&CategoryId::new("s1")));
        assert!(doc.contains_product_id(&ProductId::new("p4")));
        assert!(!doc.contains_product_id(&ProductId::new("p99")));
    }
}
