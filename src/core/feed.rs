//! Rate feed abstraction and the raw record shape.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One raw entry from the bank's currency feed. Any of the three rate
/// fields may be absent; that is normal, not an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    pub currency_code_a: u16,
    pub currency_code_b: u16,
    /// Unix timestamp of the quote.
    pub date: i64,
    #[serde(default)]
    pub rate_buy: Option<f64>,
    #[serde(default)]
    pub rate_sell: Option<f64>,
    #[serde(default)]
    pub rate_cross: Option<f64>,
}

#[async_trait]
pub trait RateFeed: Send + Sync {
    async fn fetch_rates(&self) -> Result<Vec<RateRecord>>;
}
