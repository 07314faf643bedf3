//! Catálogo Pro Core - Catalog document model and editing operations.
//!
//! This crate provides the shared catalog model used by the other crates:
//! - `catalogo-editor` - State store, persistence, export and inquiry links
//! - `catalogo-cli` - Command-line front end for viewing and editing the catalog
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access. Every editing operation takes the current [`CatalogDocument`] by
//! reference and returns a new one, so callers never observe a half-applied
//! edit.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, discounts and seasons
//! - [`catalog`] - The catalog document, editing operations and derived views

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
