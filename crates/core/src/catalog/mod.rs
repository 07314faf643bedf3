//! The catalog document and everything derived from it.
//!
//! - [`document`] - `CatalogDocument`, `Category`, `Product`
//! - [`edit`] - Copy-on-write editing operations
//! - [`views`] - Active season, search filtering, final prices

mod defaults;
pub mod document;
pub mod edit;
pub mod views;

pub use defaults::{
    DEFAULT_CATEGORY_ICON, DEFAULT_PRODUCT_IMAGE, NEW_CATEGORY_NAME, NEW_PRODUCT_DESCRIPTION,
    NEW_PRODUCT_NAME,
};
pub use document::{CatalogDocument, Category, Product};
pub use edit::{CategoryField, Edit, FieldEdit, ProductField, SettingField};
pub use views::{active_categories, filtered_categories, final_price};
