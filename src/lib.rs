pub mod cli;
pub mod config;
pub mod core;
pub mod providers;
pub mod rate_store;
pub mod store;

use crate::core::currency::CurrencyCode;
use crate::core::resolve::RateResolver;
use crate::rate_store::RateStore;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: f64,
        from: Option<String>,
        to: Option<String>,
    },
    Rates {
        currency: Option<String>,
    },
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    force_refresh: bool,
) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let feed = providers::MonobankProvider::new(&config.provider.base_url);
    let store = RateStore::new(feed, Duration::from_secs(config.cache_ttl_secs));
    let resolver = RateResolver::new(CurrencyCode(config.anchor));

    let state = store.get_snapshot(force_refresh).await;

    match command {
        AppCommand::Convert { amount, from, to } => {
            let from = parse_currency(from.as_deref().unwrap_or(&config.default_from))?;
            let to = parse_currency(to.as_deref().unwrap_or(&config.default_to))?;
            cli::convert::display_conversion(amount, from, to, &resolver, &state)
        }
        AppCommand::Rates { currency } => {
            let filter = currency.as_deref().map(parse_currency).transpose()?;
            cli::rates::display_rates(&state, filter)
        }
    }
}

fn parse_currency(input: &str) -> Result<CurrencyCode> {
    input
        .parse()
        .with_context(|| format!("Cannot parse currency '{input}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("USD").unwrap(), CurrencyCode(840));
        assert_eq!(parse_currency("980").unwrap(), CurrencyCode(980));
        assert!(parse_currency("??").is_err());
    }
}
