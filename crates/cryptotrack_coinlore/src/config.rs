use bon::Builder;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

use crate::error::{CoinloreError, Result};

// Base URL for Coinlore API
pub const DEFAULT_BASE_URL: &str = "https://api.coinlore.net/api";
pub const DEFAULT_PROXY_PREFIX: &str = "https://corsproxy.io/?url=";

pub const BASE_URL_VAR: &str = "COINLORE_BASE_URL";
pub const PROXY_PREFIX_VAR: &str = "CORS_PROXY";

/// Upstream base URL and proxy prefix, fixed for the lifetime of a client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct CoinloreConfig {
    #[builder(default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    #[builder(default = DEFAULT_PROXY_PREFIX.to_string())]
    pub proxy_prefix: String,
}

impl Default for CoinloreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy_prefix: DEFAULT_PROXY_PREFIX.to_string(),
        }
    }
}

impl CoinloreConfig {
    /// Read `COINLORE_BASE_URL` and `CORS_PROXY`, falling back to the defaults
    /// for unset or blank variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            base_url: read(BASE_URL_VAR, DEFAULT_BASE_URL),
            proxy_prefix: read(PROXY_PREFIX_VAR, DEFAULT_PROXY_PREFIX),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.base_url).map_err(|e| {
            CoinloreError::Config(format!("{BASE_URL_VAR} {:?} is not a valid URL: {e}", self.base_url))
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(CoinloreError::Config(format!(
                "{BASE_URL_VAR} must use http or https, got {:?}",
                base.scheme()
            )));
        }

        Url::parse(&self.proxy_prefix).map_err(|e| {
            CoinloreError::Config(format!(
                "{PROXY_PREFIX_VAR} {:?} is not a valid URL: {e}",
                self.proxy_prefix
            ))
        })?;

        Ok(())
    }
}
