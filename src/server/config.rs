use std::{str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::order::{AggregationOptions, FetchStrategy},
};

const DEFAULT_MAX_CONNECTIONS: u32 = 1;
const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 5000;
const DEFAULT_STEP_TIMEOUT_MS: u64 = 5000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Pool size. With a single connection, concurrent requests serialize on the transaction.
    pub max_connections: u32,
    pub acquire_timeout: Duration,

    pub aggregation: AggregationOptions,

    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            max_connections: parse_var("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout: Duration::from_millis(parse_var(
                "DB_ACQUIRE_TIMEOUT_MS",
                DEFAULT_ACQUIRE_TIMEOUT_MS,
            )?),
            aggregation: AggregationOptions {
                strategy: match std::env::var("AGGREGATION_STRATEGY") {
                    Ok(value) => value.trim().parse()?,
                    Err(_) => FetchStrategy::Narrowed,
                },
                step_timeout: Duration::from_millis(parse_var(
                    "QUERY_STEP_TIMEOUT_MS",
                    DEFAULT_STEP_TIMEOUT_MS,
                )?),
            },
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => parse_value(name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
