//! Catalog Service configuration.
//!
//! Configuration is loaded from environment variables. Database credentials
//! are held in `SecretString`, so the derived Debug output is redacted.

use common::config::{BusConfig, DatabaseConfig, DatabaseEndpoint, DEFAULT_BUS_REQUEST_TIMEOUT_MS};
use common::secret::{ExposeSecret, SecretString};
use sqlx::postgres::PgConnectOptions;
use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Default port of the operational HTTP listener.
pub const DEFAULT_PORT: u16 = 3000;

/// Default maximum pool size.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Default server-side statement timeout in seconds.
pub const DEFAULT_DB_STATEMENT_TIMEOUT_SECONDS: u32 = 5;

/// Default shutdown drain period in seconds.
pub const DEFAULT_SHUTDOWN_DRAIN_SECONDS: u64 = 5;

/// Catalog Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection settings.
    pub database: DatabaseConfig,

    /// NATS connection settings.
    pub bus: BusConfig,

    /// Bind address of the health/metrics listener (default: "0.0.0.0:3000").
    pub bind_address: String,

    /// Seconds to wait for in-flight requests after a shutdown signal.
    pub shutdown_drain_seconds: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let raw_servers = required(vars, "NATS_SERVERS")?;
        let servers = BusConfig::parse_servers(raw_servers);
        if servers.is_empty() {
            return Err(ConfigError::InvalidValue(
                "NATS_SERVERS must list at least one server".to_string(),
            ));
        }

        let queue_group = vars
            .get("NATS_QUEUE_GROUP")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let request_timeout_ms =
            positive(vars, "NATS_REQUEST_TIMEOUT_MS", DEFAULT_BUS_REQUEST_TIMEOUT_MS)?;

        let endpoint = match vars.get("DATABASE_URL").filter(|s| !s.is_empty()) {
            Some(url) => DatabaseEndpoint::Url(SecretString::from(url.clone())),
            None => DatabaseEndpoint::Parts {
                host: required(vars, "DB_HOST")?.to_string(),
                port: number(vars, "DB_PORT", None)?,
                username: required(vars, "DB_USERNAME")?.to_string(),
                password: SecretString::from(required(vars, "DB_PASSWORD")?.to_string()),
                database: required(vars, "DB_DATABASE")?.to_string(),
            },
        };

        let max_connections = positive(vars, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let statement_timeout_seconds = positive(
            vars,
            "DB_STATEMENT_TIMEOUT_SECONDS",
            DEFAULT_DB_STATEMENT_TIMEOUT_SECONDS,
        )?;

        let port: u16 = number(vars, "PORT", Some(DEFAULT_PORT))?;
        let shutdown_drain_seconds = number(
            vars,
            "SHUTDOWN_DRAIN_SECONDS",
            Some(DEFAULT_SHUTDOWN_DRAIN_SECONDS),
        )?;

        Ok(Config {
            database: DatabaseConfig {
                endpoint,
                max_connections,
                statement_timeout_seconds,
            },
            bus: BusConfig {
                servers,
                queue_group,
                request_timeout_ms,
            },
            bind_address: format!("0.0.0.0:{port}"),
            shutdown_drain_seconds,
        })
    }

    /// Build connection options for the pool.
    ///
    /// Every connection gets a server-side `statement_timeout` so queries
    /// cannot hang indefinitely.
    pub fn pg_connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options = match &self.database.endpoint {
            DatabaseEndpoint::Url(url) => PgConnectOptions::from_str(url.expose_secret())
                // The URL embeds credentials, keep the parse error out of the message
                .map_err(|_| {
                    ConfigError::InvalidValue(
                        "DATABASE_URL is not a valid PostgreSQL URL".to_string(),
                    )
                })?,
            DatabaseEndpoint::Parts {
                host,
                port,
                username,
                password,
                database,
            } => PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(username)
                .password(password.expose_secret())
                .database(database),
        };

        Ok(options.options([(
            "statement_timeout",
            format!("{}s", self.database.statement_timeout_seconds),
        )]))
    }
}

fn required<'a>(vars: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ConfigError> {
    vars.get(name)
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parse a numeric variable; `default` of `None` makes it required.
fn number<T>(vars: &HashMap<String, String>, name: &str, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match (vars.get(name), default) {
        (Some(value_str), _) => value_str.trim().parse().map_err(|e| {
            ConfigError::InvalidValue(format!(
                "{name} must be a valid number, got '{value_str}': {e}"
            ))
        }),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn positive<T>(vars: &HashMap<String, String>, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let value = number(vars, name, Some(default))?;
    if value == T::default() {
        return Err(ConfigError::InvalidValue(format!(
            "{name} must be greater than 0"
        )));
    }
    Ok(value)
}
