//! Rate snapshot types built from the Monobank feed.

use crate::core::currency::CurrencyCode;
use crate::core::feed::RateRecord;
use chrono::{DateTime, Utc};

/// One directional quote: 1 unit of `base` priced in `quote`.
///
/// A pair (A, B) and its inverse (B, A) are not guaranteed to both be
/// present in a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RatePair {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
    pub buy: Option<f64>,
    pub sell: Option<f64>,
    pub cross: Option<f64>,
    pub as_of: DateTime<Utc>,
}

impl RatePair {
    /// Rate used when converting out of `base`: sell preferred, then buy,
    /// then cross. Matches the bank's quoting convention for direct and
    /// anchor lookups.
    pub fn outgoing_rate(&self) -> Option<f64> {
        self.sell.or(self.buy).or(self.cross)
    }

    /// Rate used when inverting a quote into `base`: buy preferred, then
    /// sell, then cross.
    pub fn incoming_rate(&self) -> Option<f64> {
        self.buy.or(self.sell).or(self.cross)
    }
}

impl From<RateRecord> for RatePair {
    fn from(record: RateRecord) -> Self {
        RatePair {
            base: CurrencyCode(record.currency_code_a),
            quote: CurrencyCode(record.currency_code_b),
            buy: record.rate_buy,
            sell: record.rate_sell,
            cross: record.rate_cross,
            as_of: DateTime::from_timestamp(record.date, 0).unwrap_or_default(),
        }
    }
}

/// Immutable set of rate pairs sharing one fetch time. Replaced wholesale
/// on refresh, never patched in place.
#[derive(Debug, Clone, Default)]
pub struct RateSnapshot {
    pairs: Vec<RatePair>,
    fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    pub fn new(pairs: Vec<RatePair>, fetched_at: DateTime<Utc>) -> Self {
        Self { pairs, fetched_at }
    }

    pub fn from_records(records: Vec<RateRecord>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            pairs: records.into_iter().map(RatePair::from).collect(),
            fetched_at,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pairs(&self) -> &[RatePair] {
        &self.pairs
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First pair quoting `base` in `quote`, in snapshot order. Snapshot
    /// order is the documented tie-break when duplicates exist.
    pub fn find(&self, base: CurrencyCode, quote: CurrencyCode) -> Option<&RatePair> {
        self.pairs
            .iter()
            .find(|pair| pair.base == base && pair.quote == quote)
    }

    /// All pairs involving the given currency on either side.
    pub fn pairs_for(&self, code: CurrencyCode) -> impl Iterator<Item = &RatePair> {
        self.pairs
            .iter()
            .filter(move |pair| pair.base == code || pair.quote == code)
    }
}
