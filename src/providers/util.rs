//! Retry support for feed requests.

use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Extra attempts after the first failed feed request.
const FEED_RETRIES: usize = 2;

/// Pause between attempts; the public API rate-limits aggressive polling.
const FEED_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Runs a feed request, retrying transient failures with the fixed feed
/// policy (1 initial try + 2 retries, 500 ms apart). Returns the first
/// success or the last error once attempts are exhausted.
pub async fn fetch_with_retry<F, Fut, T, E>(mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(val) => return Ok(val),
            Err(err) => {
                if attempt > FEED_RETRIES {
                    return Err(err);
                }
                debug!(
                    "Feed request attempt {}/{} failed: {}. Retrying...",
                    attempt,
                    FEED_RETRIES + 1,
                    err
                );
                attempt += 1;
                tokio::time::sleep(FEED_RETRY_DELAY).await;
            }
        }
    }
}
