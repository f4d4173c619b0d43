//! Hidestyle Core - Shared types library.
//!
//! This crate provides the product schema used across all Hidestyle
//! components:
//! - `server` - Catalog REST API
//! - `cli` - Shop/cart/admin command-line client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. The same `Product`/`ProductInput` types serve as the API
//! contract on both sides of the wire and as the cart snapshot, so client
//! and server can never drift on field names or shapes.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, the product schema, and catalog sort keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
