//! High-level client — `SwapClient` with nested sub-client accessors.
//!
//! The sub-client lives in `domain/price/client.rs`. This module keeps the
//! builder and the startup-fixed configuration.

use crate::domain::price::client::Prices;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::PriceFeedHttp;

use std::time::Duration;

pub use crate::domain::price::client::Prices as PricesClient;

/// The primary entry point for talking to the price feed.
#[derive(Clone)]
pub struct SwapClient {
    pub(crate) http: PriceFeedHttp,
    pub(crate) icon_base_url: String,
}

impl SwapClient {
    pub fn builder() -> SwapClientBuilder {
        SwapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn prices_url(&self) -> &str {
        self.http.prices_url()
    }

    pub fn icon_base_url(&self) -> &str {
        &self.icon_base_url
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SwapClientBuilder {
    prices_url: String,
    icon_base_url: String,
    timeout: Duration,
}

impl Default for SwapClientBuilder {
    fn default() -> Self {
        Self {
            prices_url: crate::network::DEFAULT_PRICES_URL.to_string(),
            icon_base_url: crate::network::DEFAULT_TOKEN_ICON_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SwapClientBuilder {
    pub fn prices_url(mut self, url: &str) -> Self {
        self.prices_url = url.to_string();
        self
    }

    pub fn icon_base_url(mut self, url: &str) -> Self {
        self.icon_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<SwapClient, SdkError> {
        if self.prices_url.is_empty() {
            return Err(SdkError::Validation("prices_url must not be empty".to_string()));
        }
        Ok(SwapClient {
            http: PriceFeedHttp::new(&self.prices_url, self.timeout)?,
            icon_base_url: self.icon_base_url,
        })
    }
}
