//! Wire types for the price feed.

use crate::shared::serde_util::lenient_f64;
use serde::{Deserialize, Serialize};

/// One raw record of the price feed, as sent.
///
/// The feed is untrusted: `price` may be missing, null, zero or negative and
/// `date` is kept as the raw string until conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservationResponse {
    pub currency: String,
    pub date: String,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub price: Option<f64>,
}

/// The whole feed document: a homogeneous JSON array.
pub type PricesResponse = Vec<PriceObservationResponse>;
