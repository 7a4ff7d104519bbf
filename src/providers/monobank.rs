//! Monobank public currency API client.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::feed::{RateFeed, RateRecord};
use crate::providers::util::fetch_with_retry;

/// Feed endpoint path on the Monobank API host.
const CURRENCY_PATH: &str = "/bank/currency";

/// Request timeout; the public API occasionally stalls under rate limits.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// MonobankProvider implementation for RateFeed
pub struct MonobankProvider {
    base_url: String,
}

impl MonobankProvider {
    pub fn new(base_url: &str) -> Self {
        MonobankProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl RateFeed for MonobankProvider {
    #[instrument(name = "MonobankRateFetch", skip(self))]
    async fn fetch_rates(&self) -> Result<Vec<RateRecord>> {
        let url = format!("{}{}", self.base_url, CURRENCY_PATH);
        debug!("Requesting currency rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("kursy/0.2")
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response =
            fetch_with_retry(|| client.get(&url).header("Accept", "application/json").send())
                .await
                .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} from currency feed",
                response.status()
            ));
        }

        let text = response.text().await?;

        let records: Vec<RateRecord> = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse currency feed response: {}", e))?;

        debug!("Decoded {} rate records", records.len());
        Ok(records)
    }
}
