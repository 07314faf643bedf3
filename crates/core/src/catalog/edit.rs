//! Editing operations.
//!
//! Every operation takes the current document by reference and returns a new
//! one; the input is never modified. Category and product edits address the
//! active season. References to IDs that no longer exist are not errors: the
//! returned document is simply equal to the input.

use super::document::{CatalogDocument, Category, Product};
use crate::types::{CategoryId, DiscountPercent, Price, ProductId, Season};

/// A global setting and its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingField {
    Title(String),
    Subtitle(String),
    ContactNumber(String),
    CtaLabel(String),
    CtaColor(String),
    LogoUrl(String),
}

/// A category field and its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryField {
    Name(String),
    IconUrl(String),
}

/// A product field and its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductField {
    Name(String),
    Description(String),
    ImageUrl(String),
    BasePrice(Price),
    /// Also sets `hasDiscount`, like [`CatalogDocument::set_discount`].
    Discount(DiscountPercent),
}

/// A single-field edit addressed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Setting(SettingField),
    Category {
        id: CategoryId,
        field: CategoryField,
    },
    Product {
        category_id: CategoryId,
        product_id: ProductId,
        field: ProductField,
    },
}

/// A named editing operation.
///
/// Generated IDs travel inside the edit, so [`Edit::apply`] is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    SwitchSeason(Season),
    AddCategory(CategoryId),
    DeleteCategory(CategoryId),
    AddProduct {
        category_id: CategoryId,
        product_id: ProductId,
    },
    DeleteProduct {
        category_id: CategoryId,
        product_id: ProductId,
    },
    EditField(FieldEdit),
    SetDiscount {
        category_id: CategoryId,
        product_id: ProductId,
        discount: DiscountPercent,
    },
}

impl Edit {
    /// Produce the document that results from this edit.
    #[must_use]
    pub fn apply(&self, doc: &CatalogDocument) -> CatalogDocument {
        match self {
            Self::SwitchSeason(season) => doc.switch_season(*season),
            Self::AddCategory(id) => doc.add_category(id.clone()),
            Self::DeleteCategory(id) => doc.delete_category(id),
            Self::AddProduct {
                category_id,
                product_id,
            } => doc.add_product(category_id, product_id.clone()),
            Self::DeleteProduct {
                category_id,
                product_id,
            } => doc.delete_product(category_id, product_id),
            Self::EditField(edit) => doc.edit_field(edit),
            Self::SetDiscount {
                category_id,
                product_id,
                discount,
            } => doc.set_discount(category_id, product_id, *discount),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SwitchSeason(_) => "switch_season",
            Self::AddCategory(_) => "add_category",
            Self::DeleteCategory(_) => "delete_category",
            Self::AddProduct { .. } => "add_product",
            Self::DeleteProduct { .. } => "delete_product",
            Self::EditField(_) => "edit_field",
            Self::SetDiscount { .. } => "set_discount",
        }
    }
}

impl CatalogDocument {
    /// Change which season is displayed. Category data is untouched.
    #[must_use]
    pub fn switch_season(&self, season: Season) -> Self {
        Self {
            season,
            ..self.clone()
        }
    }

    /// Append a placeholder category to the active season.
    ///
    /// No-op if either season already has a category with this ID.
    #[must_use]
    pub fn add_category(&self, id: CategoryId) -> Self {
        if self.contains_category_id(&id) {
            return self.clone();
        }
        let mut categories = self.active().to_vec();
        categories.push(Category::placeholder(id));
        self.with_active(categories)
    }

    /// Remove a category from the active season.
    #[must_use]
    pub fn delete_category(&self, id: &CategoryId) -> Self {
        self.with_active(
            self.active()
                .iter()
                .filter(|c| &c.id != id)
                .cloned()
                .collect(),
        )
    }

    /// Append a placeholder product to a category of the active season.
    ///
    /// No-op if any category already has a product with this ID.
    #[must_use]
    pub fn add_product(&self, category_id: &CategoryId, product_id: ProductId) -> Self {
        if self.contains_product_id(&product_id) {
            return self.clone();
        }
        self.with_category(category_id, |category| {
            let mut products = category.products.clone();
            products.push(Product::placeholder(product_id.clone()));
            Category {
                products,
                ..category.clone()
            }
        })
    }

    /// Remove a product from a category of the active season.
    #[must_use]
    pub fn delete_product(&self, category_id: &CategoryId, product_id: &ProductId) -> Self {
        self.with_category(category_id, |category| Category {
            products: category
                .products
                .iter()
                .filter(|p| &p.id != product_id)
                .cloned()
                .collect(),
            ..category.clone()
        })
    }

    /// Set a product's discount and its `hasDiscount` flag together.
    #[must_use]
    pub fn set_discount(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
        discount: DiscountPercent,
    ) -> Self {
        self.with_product(category_id, product_id, |p| p.with_discount(discount))
    }

    /// Replace a single field, leaving its siblings alone.
    #[must_use]
    pub fn edit_field(&self, edit: &FieldEdit) -> Self {
        match edit {
            FieldEdit::Setting(setting) => self.edit_setting(setting),
            FieldEdit::Category { id, field } => self.with_category(id, |c| match field {
                CategoryField::Name(name) => Category {
                    name: name.to_uppercase(),
                    ..c.clone()
                },
                CategoryField::IconUrl(url) => Category {
                    icon_url: url.clone(),
                    ..c.clone()
                },
            }),
            FieldEdit::Product {
                category_id,
                product_id,
                field,
            } => self.with_product(category_id, product_id, |p| {
                let mut next = p.clone();
                match field {
                    ProductField::Name(name) => next.name.clone_from(name),
                    ProductField::Description(text) => next.description.clone_from(text),
                    ProductField::ImageUrl(url) => next.image_url.clone_from(url),
                    ProductField::BasePrice(price) => next.base_price = *price,
                    ProductField::Discount(discount) => return p.with_discount(*discount),
                }
                next
            }),
        }
    }

    fn edit_setting(&self, setting: &SettingField) -> Self {
        let mut next = self.clone();
        match setting {
            SettingField::Title(v) => next.title.clone_from(v),
            SettingField::Subtitle(v) => next.subtitle.clone_from(v),
            SettingField::ContactNumber(v) => next.contact_number.clone_from(v),
            SettingField::CtaLabel(v) => next.cta_label.clone_from(v),
            SettingField::CtaColor(v) => next.cta_color.clone_from(v),
            SettingField::LogoUrl(v) => next.logo_url.clone_from(v),
        }
        next
    }
}
