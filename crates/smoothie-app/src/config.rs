//! Start-up configuration read from `SMOOTHIE_*` environment variables.

use crate::clients::{DEFAULT_FRUIT_API_BASE, DEFAULT_FRUIT_API_TIMEOUT};
use serde::{Serialize, Serializer};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use table_actor::{TableError, TableName};
use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "SMOOTHIE_BIND_ADDR";
pub const ENV_DATABASE_PATH: &str = "SMOOTHIE_DATABASE_PATH";
pub const ENV_FRUIT_TABLE: &str = "SMOOTHIE_FRUIT_TABLE";
pub const ENV_ORDER_TABLE: &str = "SMOOTHIE_ORDER_TABLE";
pub const ENV_FRUIT_API_BASE: &str = "SMOOTHIE_FRUIT_API_BASE";
pub const ENV_FRUIT_API_TIMEOUT_MS: &str = "SMOOTHIE_FRUIT_API_TIMEOUT_MS";
pub const ENV_SEED_FRUITS: &str = "SMOOTHIE_SEED_FRUITS";
pub const ENV_CHANNEL_BUFFER: &str = "SMOOTHIE_CHANNEL_BUFFER";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_DATABASE_PATH: &str = "smoothies.db";
pub const DEFAULT_FRUIT_TABLE: &str = "fruit_options";
pub const DEFAULT_ORDER_TABLE: &str = "orders";
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    InvalidTable {
        var: &'static str,
        #[source]
        source: TableError,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_path: PathBuf,
    #[serde(serialize_with = "as_display")]
    pub fruit_table: TableName,
    #[serde(serialize_with = "as_display")]
    pub order_table: TableName,
    pub fruit_api_base: String,
    #[serde(serialize_with = "as_millis")]
    pub fruit_api_timeout: Duration,
    pub seed_fruits: Vec<String>,
    pub channel_buffer: usize,
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source. Unset or unparsable values
    /// fall back to their defaults; table names are the exception and fail.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env_string = |name: &str, default: &str| -> String {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let env_u64 = |name: &str, default: u64| -> u64 {
            lookup(name)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };
        let env_table = |var: &'static str, default: &str| -> Result<TableName, ConfigError> {
            TableName::parse(&env_string(var, default))
                .map_err(|source| ConfigError::InvalidTable { var, source })
        };

        let default_timeout_ms = DEFAULT_FRUIT_API_TIMEOUT.as_millis() as u64;
        let channel_buffer = lookup(ENV_CHANNEL_BUFFER)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_CHANNEL_BUFFER);

        Ok(Self {
            bind_addr: env_string(ENV_BIND_ADDR, DEFAULT_BIND_ADDR),
            database_path: PathBuf::from(env_string(ENV_DATABASE_PATH, DEFAULT_DATABASE_PATH)),
            fruit_table: env_table(ENV_FRUIT_TABLE, DEFAULT_FRUIT_TABLE)?,
            order_table: env_table(ENV_ORDER_TABLE, DEFAULT_ORDER_TABLE)?,
            fruit_api_base: env_string(ENV_FRUIT_API_BASE, DEFAULT_FRUIT_API_BASE),
            fruit_api_timeout: Duration::from_millis(
                Some(env_u64(ENV_FRUIT_API_TIMEOUT_MS, default_timeout_ms))
                    .filter(|ms| *ms > 0)
                    .unwrap_or(default_timeout_ms),
            ),
            seed_fruits: parse_list(&lookup(ENV_SEED_FRUITS).unwrap_or_default()),
            channel_buffer,
        })
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn as_display<S: Serializer>(value: &TableName, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn as_millis<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(value.as_millis() as u64)
}
