//! The catalog state container.
//!
//! `CatalogStore` owns the one [`CatalogDocument`] of a session. Every edit
//! goes through [`CatalogStore::apply`], which builds the next document,
//! writes it to storage, and only then makes it current. If the write fails
//! the store keeps the previous document, so memory and storage never
//! disagree.
//!
//! # Example
//!
//! ```
//! use catalogo_editor::{AlwaysConfirm, CatalogStore, MemoryStorage};
//!
//! let mut store = CatalogStore::open(MemoryStorage::new(), "catalog").unwrap();
//! let id = store.add_category().unwrap();
//! assert!(store.document().find_category(&id).is_some());
//!
//! store.delete_category(&id, &mut AlwaysConfirm).unwrap();
//! assert!(store.document().find_category(&id).is_none());
//! ```

use catalogo_core::{
    CatalogDocument, Category, CategoryId, DiscountPercent, Edit, FieldEdit, IdGenerator,
    Product, ProductId, Season, filtered_categories,
};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::EditorConfig;
use crate::storage::{FileStorage, KeyValueStorage, StorageError};

/// Storage key used by the web catalog.
pub const DEFAULT_STORAGE_KEY: &str = "catalogo_pro_data_v4";

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Asks the operator to approve a destructive action.
pub trait Confirm {
    /// Returns true if the action described by `prompt` should go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Approves everything. For scripted use (`--yes`) and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Owns the catalog document and persists it after every edit.
#[derive(Debug)]
pub struct CatalogStore<S> {
    storage: S,
    key: String,
    document: CatalogDocument,
    ids: IdGenerator,
}

impl CatalogStore<FileStorage> {
    /// Open the file-backed store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial document cannot be written.
    pub fn from_config(config: &EditorConfig) -> Result<Self, StoreError> {
        Self::open(FileStorage::new(&config.data_dir), config.storage_key.clone())
    }
}

impl<S: KeyValueStorage> CatalogStore<S> {
    /// Load the document stored under `key`, falling back to the built-in
    /// catalog when the slot is empty or its content does not parse, and
    /// persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read (the slot is left as it
    /// was) or if the loaded document cannot be written back.
    #[instrument(skip_all)]
    pub fn open(mut storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key: String = key.into();
        let document = load_document(&storage, &key)?;
        persist(&mut storage, &key, &document)?;

        info!(key = %key, season = %document.season, "Catalog opened");
        Ok(Self {
            storage,
            key,
            document,
            ids: IdGenerator::new(),
        })
    }

    /// Apply an edit and persist the resulting document.
    ///
    /// # Errors
    ///
    /// Returns an error if the new document cannot be serialized or written;
    /// the current document is left as it was.
    #[instrument(skip_all, fields(edit = edit.name()))]
    pub fn apply(&mut self, edit: &Edit) -> Result<&CatalogDocument, StoreError> {
        let next = edit.apply(&self.document);
        if next == self.document {
            debug!("Edit left the catalog unchanged");
        }

        persist(&mut self.storage, &self.key, &next)?;
        self.document = next;
        info!("Catalog saved");
        Ok(&self.document)
    }

    /// Show the given season.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be saved.
    pub fn switch_season(&mut self, season: Season) -> Result<(), StoreError> {
        self.apply(&Edit::SwitchSeason(season)).map(drop)
    }

    /// Append a placeholder category to the active season and return its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be saved.
    pub fn add_category(&mut self) -> Result<CategoryId, StoreError> {
        let doc = &self.document;
        let id = self.ids.next_category_id(|id| doc.contains_category_id(id));
        self.apply(&Edit::AddCategory(id.clone()))?;
        Ok(id)
    }

    /// Delete a category of the active season once `confirm` approves.
    ///
    /// Returns `false` when the operator declined; nothing is changed then.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be saved.
    pub fn delete_category(
        &mut self,
        id: &CategoryId,
        confirm: &mut impl Confirm,
    ) -> Result<bool, StoreError> {
        if !confirm.confirm("¿Estás seguro de eliminar esta categoría?") {
            debug!(category = %id, "Category deletion declined");
            return Ok(false);
        }
        self.apply(&Edit::DeleteCategory(id.clone()))?;
        Ok(true)
    }

    /// Append a placeholder product to a category of the active season.
    ///
    /// Returns `None` without touching the catalog when the category does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be saved.
    pub fn add_product(&mut self, category_id: &CategoryId) -> Result<Option<ProductId>, StoreError> {
        if self.document.find_category(category_id).is_none() {
            debug!(category = %category_id, "Add product to unknown category ignored");
            return Ok(None);
        }

        let doc = &self.document;
        let product_id = self.ids.next_product_id(|id| doc.contains_product_id(id));
        self.apply(&Edit::AddProduct {
            category_id: category_id.clone(),
            product_id: product_id.clone(),
        })?;
        Ok(Some(product_id))
    }

    /// Delete a product once `confirm` approves.
    ///
    /// Returns `false` when the operator declined.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be saved.
    pub fn delete_product(
        &mut self,
        category_id: &CategoryId,
        product_id: &ProductId,
        confirm: &mut impl Confirm,
    ) -> Result<bool, StoreError> {
        if !confirm.confirm("¿Deseas eliminar este producto?") {
            debug!(product = %product_id, "Product deletion declined");
            return Ok(false);
        }
        self.apply(&Edit::DeleteProduct {
            category_id: category_id.clone(),
            product_id: product_id.clone(),
        })?;
        Ok(true)
    }

    /// Replace one field.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be saved.
    pub fn edit_field(&mut self, edit: FieldEdit) -> Result<(), StoreError> {
        self.apply(&Edit::EditField(edit)).map(drop)
    }

    /// Set a product's discount percentage and `hasDiscount` flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be saved.
    pub fn set_discount(
        &mut self,
        category_id: &CategoryId,
        product_id: &ProductId,
        discount: DiscountPercent,
    ) -> Result<(), StoreError> {
        self.apply(&Edit::SetDiscount {
            category_id: category_id.clone(),
            product_id: product_id.clone(),
            discount,
        })
        .map(drop)
    }

    #[must_use]
    pub const fn document(&self) -> &CatalogDocument {
        &self.document
    }

    /// Categories of the season on display.
    #[must_use]
    pub fn active_categories(&self) -> &[Category] {
        catalogo_core::active_categories(&self.document)
    }

    /// Active categories narrowed by a search query.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Category> {
        filtered_categories(&self.document, query)
    }

    #[must_use]
    pub fn find_product(&self, category_id: &CategoryId, product_id: &ProductId) -> Option<&Product> {
        self.document.find_product(category_id, product_id)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, e.g. to reopen it later.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn load_document(
    storage: &impl KeyValueStorage,
    key: &str,
) -> Result<CatalogDocument, StorageError> {
    let document = match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Stored catalog is unreadable, using built-in catalog");
            CatalogDocument::default()
        }),
        None => {
            info!("No stored catalog, using built-in catalog");
            CatalogDocument::default()
        }
    };
    Ok(document)
}

fn persist(
    storage: &mut impl KeyValueStorage,
    key: &str,
    document: &CatalogDocument,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(document)?;
    storage.set(key, &json)?;
    Ok(())
}
