//! # Configuration
//!
//! Runtime configuration read from the environment once at startup.
//!
//! | Variable            | Default                               |
//! |---------------------|---------------------------------------|
//! | `EXCHANGE_API_KEY`  | empty (the provider reports the error) |
//! | `EXCHANGE_API_URL`  | `https://open.er-api.com/v6/latest`   |
//!
//! `main` loads an optional `.env` file with `dotenvy` before calling
//! [`ConverterConfig::from_env`].

use std::env;
use std::time::Duration;

/// Latest-rates endpoint of the public provider.
pub const DEFAULT_API_URL: &str = "https://open.er-api.com/v6/latest";

/// Upper bound for one rate request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Clone, Debug)]
pub struct ConverterConfig {
    pub api_key: String,
    pub api_url: String,
    pub request_timeout: Duration,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ConverterConfig {
    /// Build from `EXCHANGE_API_KEY` / `EXCHANGE_API_URL`.
    ///
    /// A missing key is tolerated: requests go out with an empty key and the
    /// provider's rejection surfaces through the normal failure path.
    pub fn from_env() -> Self {
        let api_key = env::var("EXCHANGE_API_KEY").unwrap_or_default();
        let api_url = env::var("EXCHANGE_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if api_key.is_empty() {
            tracing::warn!("EXCHANGE_API_KEY is not set - requests will be sent without a key");
        }

        Self {
            api_key,
            api_url,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
