//! Handlers for the Catalog Service.
//!
//! Message handlers take the shared state and the request payload and return
//! the reply value. `health` and `metrics` serve the operational HTTP
//! listener.

pub mod payload;

pub mod categories;
pub mod cities;
pub mod degrees;
pub mod file_dossiers;
pub mod financial_entities;
pub mod kinships;
pub mod modules;
pub mod pension_entities;
pub mod procedure_documents;
pub mod retirement_fund_averages;
pub mod units;

pub mod health;
pub mod metrics;

pub use health::{health_check, readiness_check};
pub use metrics::metrics_handler;
