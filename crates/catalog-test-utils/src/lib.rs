//! # Catalog Test Utilities
//!
//! Shared test utilities for the Catalog Service.
//!
//! This crate provides:
//! - Fixed fixture ids (`test_ids`)
//! - A reference data set (`seed::seed_catalog`)
//! - Server test harness (`TestCatalog`) that serves the HTTP listener and
//!   dispatches bus requests through the real pattern router
//! - `LocalRequester`, a `BusRequester` that never leaves the process
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_test_utils::*;
//!
//! #[sqlx::test(migrations = "../../migrations")]
//! async fn test_example(pool: PgPool) -> Result<()> {
//!     seed_catalog(&pool).await?;
//!     let catalog = TestCatalog::spawn(pool).await?;
//!
//!     let kinship = catalog.call("kinships.findOne", json!({"id": KINSHIP_SPOUSE})).await?;
//!     assert_eq!(kinship["name"], "Esposa");
//!     Ok(())
//! }
//! ```

pub mod local_requester;
pub mod seed;
pub mod server_harness;
pub mod test_ids;

// Re-export commonly used items
pub use local_requester::LocalRequester;
pub use seed::seed_catalog;
pub use server_harness::*;
pub use test_ids::*;
