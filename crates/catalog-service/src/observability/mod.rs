//! Observability module for the Catalog Service.
//!
//! Provides metrics definitions and recording helpers.

pub mod metrics;
