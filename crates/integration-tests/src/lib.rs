//! Integration tests for Catálogo Pro.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p catalogo-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence` - Saving and reopening catalogs on disk
//! - `catalog_scenarios` - End-to-end editing and browsing flows
//! - `export` - Backups and inquiry links

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use catalogo_editor::{CatalogStore, EditorConfig, FileStorage, StoreError};

/// Open a file-backed store rooted at `dir` with every other setting at its
/// default.
///
/// # Errors
///
/// Returns an error if the initial catalog cannot be written.
pub fn open_store(dir: &Path) -> Result<CatalogStore<FileStorage>, StoreError> {
    CatalogStore::from_config(&EditorConfig::default().with_data_dir(dir))
}
