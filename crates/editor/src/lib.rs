//! Catálogo Pro Editor library.
//!
//! Holds the single catalog document for a session and keeps it in sync with
//! durable storage.
//!
//! # Modules
//!
//! - [`store`] - `CatalogStore`, the state container every consumer goes through
//! - [`storage`] - Key-value storage backends (file and in-memory)
//! - [`export`] - Pretty-printed JSON backups
//! - [`links`] - Messaging deep links for product inquiries
//! - [`admin`] - The hidden logo-tap gesture that unlocks editing controls
//! - [`config`] - Environment-based configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod config;
pub mod export;
pub mod links;
pub mod storage;
pub mod store;

pub use admin::AdminSession;
pub use config::{ConfigError, EditorConfig};
pub use export::{BACKUP_FILE_NAME, ExportError, export_json, write_backup};
pub use links::{inquiry_link, inquiry_message};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{AlwaysConfirm, CatalogStore, Confirm, StoreError};
