//! Process configuration, read from environment variables.
//!
//! | Variable            | Default        | Meaning                              |
//! |---------------------|----------------|--------------------------------------|
//! | `CATALOG_ADDR`      | `0.0.0.0:8081` | address the HTTP server binds to     |
//! | `CATALOG_SEED_DATA` | `true`         | insert the demo products on startup  |

use std::net::SocketAddr;

use thiserror::Error;

pub const ADDR_VAR: &str = "CATALOG_ADDR";
pub const SEED_DATA_VAR: &str = "CATALOG_SEED_DATA";

const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: expected a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    pub seed_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            seed_data: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source (tests use a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(SEED_DATA_VAR) {
            config.seed_data = parse_bool(&value).ok_or_else(|| ConfigError::InvalidBool {
                var: SEED_DATA_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
