use std::time::Duration;

use crate::common::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.bucketlist.sa/api/guide-stores/public";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// `STOREFRONT_API_BASE`
    pub api_base: String,
    /// `BIND_ADDR`
    pub bind_addr: String,
    /// `STATIC_DIR`
    pub static_dir: String,
    /// `STOREFRONT_CACHE_TTL_SECS`; `0` disables lookup caching.
    pub cache_ttl: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let api_base = get("STOREFRONT_API_BASE").unwrap_or(defaults.api_base);
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "STOREFRONT_API_BASE",
                value: api_base,
                reason: "must be an http(s) URL".into(),
            });
        }

        let cache_ttl = match get("STOREFRONT_CACHE_TTL_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    key: "STOREFRONT_CACHE_TTL_SECS",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.cache_ttl,
        };

        Ok(Self {
            api_base,
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: get("STATIC_DIR").unwrap_or(defaults.static_dir),
            cache_ttl,
        })
    }
}
