//! Integration tests for Hidestyle.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! cargo run -p hidestyle-cli -- migrate
//!
//! # Start the catalog server
//! cargo run -p hidestyle-server
//!
//! # Run the ignored API tests against it
//! cargo test -p hidestyle-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `catalog_api` - Catalog REST contract tests (CRUD, sort/filter, 405s)
//!
//! Tests create their own fixture products under throwaway categories and
//! delete them afterwards, so they can run against a shared database.
