//! Prices sub-client — one fresh feed retrieval per call.

use crate::client::SwapClient;
use crate::domain::price::{observations_from_wire, PriceObservation, PriceSource};
use crate::domain::token::TokenCatalog;
use crate::error::FetchError;

/// Sub-client for price feed operations.
pub struct Prices<'a> {
    pub(crate) client: &'a SwapClient,
}

impl<'a> Prices<'a> {
    /// Fetch and parse the feed. Transport failures and non-success statuses
    /// are `FetchError::Network`; a malformed body is `FetchError::Parse`.
    pub async fn fetch(&self) -> Result<Vec<PriceObservation>, FetchError> {
        let records = self.client.http.get_prices().await.map_err(|e| {
            let err = FetchError::from(e);
            tracing::warn!(url = self.client.http.prices_url(), "Price feed fetch failed: {}", err);
            err
        })?;
        tracing::debug!(records = records.len(), "Fetched price feed");
        Ok(observations_from_wire(records))
    }

    /// Fetch the feed and build a fresh catalog from it.
    pub async fn catalog(&self) -> Result<TokenCatalog, FetchError> {
        let observations = self.fetch().await?;
        Ok(TokenCatalog::build(&observations, &self.client.icon_base_url))
    }
}

impl PriceSource for SwapClient {
    async fn fetch_prices(&self) -> Result<Vec<PriceObservation>, FetchError> {
        self.prices().fetch().await
    }
}
