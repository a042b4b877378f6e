//! # Rate Client
//!
//! HTTP client for the exchange-rate provider.

use reqwest::Client;
use shared::CurrencyCode;

use crate::config::ConverterConfig;
use crate::core::service::RateService;
use crate::services::api::rates::{self, RateQuoteResult};

/// HTTP client for the provider's latest-rates endpoint.
///
/// One `reqwest::Client` is shared by every request so connections are pooled.
pub struct RateClient {
    pub(crate) client: Client,
    api_key: String,
    api_url: String,
}

impl RateClient {
    /// Create a client from configuration.
    ///
    /// The configured timeout bounds each request end to end.
    pub fn new(config: &ConverterConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    timeout_secs = config.request_timeout.as_secs(),
                    "HTTP client builder failed - falling back to default client without request timeout"
                );
                Client::new()
            });

        Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        }
    }

    pub(crate) fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[async_trait::async_trait]
impl RateService for RateClient {
    async fn fetch_rate(&self, base: CurrencyCode, target: CurrencyCode) -> RateQuoteResult {
        rates::get_latest_rate(self, base, target).await
    }
}
