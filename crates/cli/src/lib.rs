//! Hidestyle client library.
//!
//! Everything the shop/admin surfaces need that is not rendering: the cart
//! state manager with its persistence port, the catalog API client,
//! client-side listing composition (price ceiling, dashboard search), and
//! the asset-host image upload side-channel. The `hs-cli` binary is one
//! thin presentation layer over these; each operation returns a
//! result-or-error value and leaves presentation to the caller.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod upload;
