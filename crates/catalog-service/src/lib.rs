//! Catalog Service Library
//!
//! Read-only lookup service for the platform's reference tables
//! (categories, cities, degrees, kinships, units, procedure modules and
//! documents, financial and pension entities, file dossiers, retirement
//! fund averages). Requests arrive over NATS as message patterns such as
//! `kinships.findOne`; each is answered with a single reply packet.
//!
//! # Architecture
//!
//! The service follows the Handler -> Service -> Repository pattern:
//!
//! ```text
//! transport/mod.rs -> routes/mod.rs -> handlers/*.rs -> services/*.rs -> repositories/*.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with reply code mapping
//! - `handlers` - Message handlers plus operational HTTP handlers
//! - `lifecycle` - Server task supervision and shutdown
//! - `models` - Row types and response envelopes
//! - `observability` - Metrics definitions
//! - `repositories` - SQL access per table
//! - `routes` - Pattern routing table and HTTP router
//! - `services` - Projection, relation loading and not-found policy
//! - `transport` - NATS subscription loop

pub mod config;
pub mod errors;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod transport;
