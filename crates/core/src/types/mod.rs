//! Core types for Hidestyle.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod product;
pub mod sort;

pub use id::*;
pub use product::{Product, ProductInput};
pub use sort::SortKey;
