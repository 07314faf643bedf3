//! Core types for Catálogo Pro.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod season;

pub use id::*;
pub use price::{CURRENCY_SYMBOL, DiscountPercent, Price, format_price};
pub use season::{ParseSeasonError, Season};
