//! Core business logic abstractions

pub mod cache;
pub mod currency;
pub mod feed;
pub mod log;
pub mod rates;
pub mod resolve;

// Re-export main types for cleaner imports
pub use cache::{Cache, CacheEntry};
pub use currency::{CurrencyCode, CurrencyInfo, CurrencyTable};
pub use feed::{RateFeed, RateRecord};
pub use rates::{RatePair, RateSnapshot};
pub use resolve::RateResolver;
