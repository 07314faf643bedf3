//! Editing commands for categories, products and global settings.
//!
//! Unknown IDs are reported as warnings and leave the catalog untouched.

use std::io::Write;

use catalogo_core::{
    CategoryField, CategoryId, DiscountPercent, FieldEdit, Price, ProductField, ProductId,
    SettingField,
};
use catalogo_editor::{CatalogStore, Confirm, KeyValueStorage};
use tracing::{info, warn};

use super::CommandResult;

/// Requested product changes, as typed by the operator.
#[derive(Debug, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub discount: Option<String>,
    pub image: Option<String>,
}

impl ProductChanges {
    fn into_fields(self) -> Vec<ProductField> {
        [
            self.name.map(ProductField::Name),
            self.description.map(ProductField::Description),
            self.price.map(|raw| ProductField::BasePrice(Price::parse_lenient(&raw))),
            self.discount
                .map(|raw| ProductField::Discount(DiscountPercent::parse_lenient(&raw))),
            self.image.map(ProductField::ImageUrl),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Requested global setting changes.
#[derive(Debug, Default)]
pub struct SettingsChanges {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub contact: Option<String>,
    pub cta_label: Option<String>,
    pub cta_color: Option<String>,
    pub logo: Option<String>,
}

impl SettingsChanges {
    fn into_fields(self) -> Vec<SettingField> {
        [
            self.title.map(SettingField::Title),
            self.subtitle.map(SettingField::Subtitle),
            self.contact.map(SettingField::ContactNumber),
            self.cta_label.map(SettingField::CtaLabel),
            self.cta_color.map(SettingField::CtaColor),
            self.logo.map(SettingField::LogoUrl),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Add a placeholder category and print its ID.
///
/// # Errors
///
/// Returns an error if the catalog cannot be saved or the ID cannot be printed.
pub fn add_category<S: KeyValueStorage>(
    store: &mut CatalogStore<S>,
    out: &mut impl Write,
) -> CommandResult {
    let id = store.add_category()?;
    info!(category = %id, "Category added");
    writeln!(out, "{id}")?;
    Ok(())
}

/// Delete a category after confirmation.
///
/// # Errors
///
/// Returns an error if the catalog cannot be saved.
pub fn delete_category<S: KeyValueStorage>(
    store: &mut CatalogStore<S>,
    id: &CategoryId,
    confirm: &mut impl Confirm,
) -> CommandResult {
    if store.document().find_category(id).is_none() {
        warn!(category = %id, "Unknown category, nothing deleted");
        return Ok(());
    }

    if store.delete_category(id, confirm)? {
        info!(category = %id, "Category deleted");
    } else {
        info!("Deletion cancelled");
    }
    Ok(())
}

/// Rename a category or change its icon.
///
/// # Errors
///
/// Returns an error if the catalog cannot be saved.
pub fn set_category<S: KeyValueStorage>(
    store: &mut CatalogStore<S>,
    id: &CategoryId,
    name: Option<String>,
    icon: Option<String>,
) -> CommandResult {
    if store.document().find_category(id).is_none() {
        warn!(category = %id, "Unknown category, nothing changed");
        return Ok(());
    }

    let fields: Vec<CategoryField> = [name.map(CategoryField::Name), icon.map(CategoryField::IconUrl)]
        .into_iter()
        .flatten()
        .collect();
    if fields.is_empty() {
        warn!("Nothing to change; pass --name or --icon");
        return Ok(());
    }

    for field in fields {
        store.edit_field(FieldEdit::Category {
            id: id.clone(),
            field,
        })?;
    }
    info!(category = %id, "Category updated");
    Ok(())
}

/// Add a placeholder product to a category and print its ID.
///
/// # Errors
///
/// Returns an error if the catalog cannot be saved or the ID cannot be printed.
pub fn add_product<S: KeyValueStorage>(
    store: &mut CatalogStore<S>,
    category_id: &CategoryId,
    out: &mut impl Write,
) -> CommandResult {
    match store.add_product(category_id)? {
        Some(id) => {
            info!(category = %category_id, product = %id, "Product added");
            writeln!(out, "{id}")?;
        }
        None => warn!(category = %category_id, "Unknown category, no product added"),
    }
    Ok(())
}

/// Delete a product after confirmation.
///
/// # Errors
///
/// Returns an error if the catalog cannot be saved.
pub fn delete_product<S: KeyValueStorage>(
    store: &mut CatalogStore<S>,
    category_id: &CategoryId,
    product_id: &ProductId,
    confirm: &mut impl Confirm,
) -> CommandResult {
    if store.find_product(category_id, product_id).is_none() {
        warn!(category = %category_id, product = %product_id, "Unknown product, nothing deleted");
        return Ok(());
    }

    if store.delete_product(category_id, product_id, confirm)? {
        info!(product = %product_id, "Product deleted");
    } else {
        info!("Deletion cancelled");
    }
    Ok(())
}

/// Apply product changes. Prices and discounts that are not numbers count
/// as zero.
///
/// # Errors
///
/// Returns an error if the catalog cannot be saved.
pub fn set_product<S: KeyValueStorage>(
    store: &mut CatalogStore<S>,
    category_id: &CategoryId,
    product_id: &ProductId,
    changes: ProductChanges,
) -> CommandResult {
    if store.find_product(category_id, product_id).is_none() {
        warn!(category = %category_id, product = %product_id, "Unknown product, nothing changed");
        return Ok(());
    }

    let fields = changes.into_fields();
    if fields.is_empty() {
        warn!("Nothing to change");
        return Ok(());
    }

    for field in fields {
        store.edit_field(FieldEdit::Product {
            category_id: category_id.clone(),
            product_id: product_id.clone(),
            field,
        })?;
    }
    info!(product = %product_id, "Product updated");
    Ok(())
}

/// Apply global setting changes.
///
/// # Errors
///
/// Returns an error if the catalog cannot be saved.
pub fn set_settings<S: KeyValueStorage>(
    store: &mut CatalogStore<S>,
    changes: SettingsChanges,
) -> CommandResult {
    let fields = changes.into_fields();
    if fields.is_empty() {
        warn!("Nothing to change");
        return Ok(());
    }

    for field in fields {
        store.edit_field(FieldEdit::Setting(field))?;
    }
    info!("Settings updated");
    Ok(())
}
