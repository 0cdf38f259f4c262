//! Common utilities and types shared across catalog components.

#![warn(clippy::pedantic)]

/// Module for common error types
pub mod error;

/// Module for common configuration
pub mod config;

/// Module for secret types that prevent accidental logging
pub mod secret;

/// Module for the message-bus packet codec and request client
pub mod bus;
