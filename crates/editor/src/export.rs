//! Catalog backups.
//!
//! A backup is the full document as pretty-printed JSON (two-space indent),
//! the same shape the store persists, so it can be dropped back into a data
//! directory as-is.

use std::path::{Path, PathBuf};

use catalogo_core::CatalogDocument;
use thiserror::Error;
use tracing::info;

/// File name of an exported backup.
pub const BACKUP_FILE_NAME: &str = "catalogo_backup.json";

/// Error type for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize the document with two-space indentation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_json(doc: &CatalogDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

/// Write `<dir>/catalogo_backup.json` and return its path.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write_backup(doc: &CatalogDocument, dir: &Path) -> Result<PathBuf, ExportError> {
    let json = export_json(doc)?;
    let path = dir.join(BACKUP_FILE_NAME);

    std::fs::create_dir_all(dir)
        .and_then(|()| std::fs::write(&path, json.as_bytes()))
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), bytes = json.len(), "Catalog exported");
    Ok(path)
}
