//! Conversions from wire types to domain types for price observations.

use super::wire::PriceObservationResponse;
use super::PriceObservation;
use crate::shared::serde_util::parse_timestamp;
use std::fmt;

/// A feed record whose `date` could not be read as a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidObservation {
    pub currency: String,
    pub date: String,
}

impl fmt::Display for InvalidObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid date {:?} for {}", self.date, self.currency)
    }
}

impl std::error::Error for InvalidObservation {}

impl TryFrom<PriceObservationResponse> for PriceObservation {
    type Error = InvalidObservation;

    fn try_from(r: PriceObservationResponse) -> Result<Self, Self::Error> {
        match parse_timestamp(&r.date) {
            Some(date) => Ok(PriceObservation {
                currency: r.currency.into(),
                date,
                price: r.price,
            }),
            None => Err(InvalidObservation {
                currency: r.currency,
                date: r.date,
            }),
        }
    }
}

/// Convert a whole feed, dropping records with unreadable dates.
///
/// The document itself was well-formed, so one bad record does not fail the feed.
pub fn observations_from_wire(records: Vec<PriceObservationResponse>) -> Vec<PriceObservation> {
    records
        .into_iter()
        .filter_map(|r| match PriceObservation::try_from(r) {
            Ok(obs) => Some(obs),
            Err(e) => {
                tracing::warn!("Dropping price record: {}", e);
                None
            }
        })
        .collect()
}
