use chrono::Duration;

use crate::client::error::ConfigError;

/// Base URL of the public Rick and Morty API
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// How long a successful fetch is served from the cache without a network call
pub const DEFAULT_STALE_SECS: i64 = 5 * 60;

/// How long an untouched cache entry is kept before being discarded
pub const DEFAULT_CACHE_SECS: i64 = 30 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub stale_time: Duration,
    pub cache_time: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            stale_time: Duration::seconds(DEFAULT_STALE_SECS),
            cache_time: Duration::seconds(DEFAULT_CACHE_SECS),
        }
    }
}

impl Config {
    /// Reads overrides baked in at build time.
    ///
    /// A WASM bundle has no process environment at runtime, so the variables are captured
    /// with `option_env!` when the crate is compiled. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("RICKDEX_API_URL"),
            option_env!("RICKDEX_STALE_SECS"),
            option_env!("RICKDEX_CACHE_SECS"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        stale_secs: Option<&str>,
        cache_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = api_url {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidEnvValue {
                    var: "RICKDEX_API_URL".to_string(),
                    reason: format!("expected an http(s) URL, got {:?}", url),
                });
            }
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(secs) = stale_secs {
            config.stale_time = parse_seconds("RICKDEX_STALE_SECS", secs)?;
        }

        if let Some(secs) = cache_secs {
            config.cache_time = parse_seconds("RICKDEX_CACHE_SECS", secs)?;
        }

        Ok(config)
    }
}

fn parse_seconds(var: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map(|secs| Duration::seconds(i64::from(secs)))
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
