//! Price domain — feed observations and the source they come from.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::FetchError;
use crate::shared::Currency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

pub use convert::{observations_from_wire, InvalidObservation};

/// One timestamped price record for a currency.
///
/// `price` is still untrusted here; the catalog builder decides what survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub currency: Currency,
    pub date: DateTime<Utc>,
    pub price: Option<f64>,
}

impl PriceObservation {
    pub fn new(currency: impl Into<Currency>, date: DateTime<Utc>, price: Option<f64>) -> Self {
        Self {
            currency: currency.into(),
            date,
            price,
        }
    }

    /// The price if it is usable: present, finite and strictly positive.
    pub fn valid_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p > 0.0)
    }
}

/// Anything that can produce a fresh list of price observations.
///
/// Each call is one retrieval; implementations must not cache across calls.
pub trait PriceSource {
    fn fetch_prices(&self) -> impl Future<Output = Result<Vec<PriceObservation>, FetchError>>;
}
