use std::time::Duration;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const FEED_BODY: &str = r#"[
        {
            "currencyCodeA": 840,
            "currencyCodeB": 980,
            "date": 1712070000,
            "rateBuy": 41.0,
            "rateSell": 41.5
        },
        {
            "currencyCodeA": 978,
            "currencyCodeB": 980,
            "date": 1712070000,
            "rateBuy": 44.5,
            "rateSell": 45.0
        },
        {
            "currencyCodeA": 826,
            "currencyCodeB": 980,
            "date": 1712070000,
            "rateCross": 52.3
        }
    ]"#;

    pub async fn create_feed_mock_server(body: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bank/currency"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

#[test_log::test(tokio::test)]
async fn test_full_conversion_flow_with_mock_feed() {
    use kursy::core::currency::CurrencyCode;
    use kursy::core::resolve::RateResolver;
    use kursy::providers::MonobankProvider;
    use kursy::rate_store::{DEFAULT_TTL, RateStore};

    let mock_server = test_utils::create_feed_mock_server(test_utils::FEED_BODY).await;

    let feed = MonobankProvider::new(&mock_server.uri());
    let store = RateStore::new(feed, DEFAULT_TTL);
    let resolver = RateResolver::default();

    let state = store.get_snapshot(false).await;
    info!(pairs = state.snapshot.pairs().len(), "Fetched snapshot");
    assert!(!state.is_stale);
    assert_eq!(state.snapshot.pairs().len(), 3);

    let usd = CurrencyCode(840);
    let eur = CurrencyCode(978);
    let uah = CurrencyCode(980);
    let gbp = CurrencyCode(826);

    // Direct: sell preferred.
    assert_eq!(
        resolver.convert(100.0, usd, uah, &state.snapshot),
        Some(4150.0)
    );

    // Reverse: buy preferred, inverted.
    let uah_to_usd = resolver.resolve_rate(uah, usd, &state.snapshot).unwrap();
    assert!((uah_to_usd - 1.0 / 41.0).abs() < 1e-9);

    // Cross via the anchor.
    let usd_to_eur = resolver.resolve_rate(usd, eur, &state.snapshot).unwrap();
    assert!((usd_to_eur - 41.5 / 45.0).abs() < 1e-9);

    // Cross-only pair resolves through its cross value.
    assert_eq!(
        resolver.resolve_rate(gbp, uah, &state.snapshot),
        Some(52.3)
    );

    // Unknown pair is a normal not-found.
    assert_eq!(resolver.resolve_rate(usd, CurrencyCode(392), &state.snapshot), None);
}

#[test_log::test(tokio::test)]
async fn test_stale_fallback_when_feed_goes_down() {
    use kursy::providers::MonobankProvider;
    use kursy::rate_store::RateStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    let mock_server = test_utils::create_feed_mock_server(test_utils::FEED_BODY).await;

    let feed = MonobankProvider::new(&mock_server.uri());
    // Zero TTL so the snapshot expires right away.
    let store = RateStore::new(feed, Duration::from_millis(0));

    let state = store.get_snapshot(false).await;
    assert!(!state.is_stale);
    assert_eq!(state.snapshot.pairs().len(), 3);

    // Feed starts failing; expired cached data must come back flagged stale.
    mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/bank/currency"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    tokio::time::sleep(Duration::from_millis(5)).await;

    let degraded = store.get_snapshot(false).await;
    assert!(degraded.is_stale);
    assert_eq!(degraded.snapshot.pairs().len(), 3);
}

#[test_log::test(tokio::test)]
async fn test_empty_snapshot_when_feed_never_succeeds() {
    use kursy::providers::MonobankProvider;
    use kursy::rate_store::{DEFAULT_TTL, RateStore};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bank/currency"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let feed = MonobankProvider::new(&mock_server.uri());
    let store = RateStore::new(feed, DEFAULT_TTL);

    let state = store.get_snapshot(false).await;
    assert!(state.is_stale);
    assert!(state.snapshot.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_force_refresh_hits_the_feed_again() {
    use kursy::providers::MonobankProvider;
    use kursy::rate_store::{DEFAULT_TTL, RateStore};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bank/currency"))
        .respond_with(ResponseTemplate::new(200).set_body_string(test_utils::FEED_BODY))
        .expect(2)
        .mount(&mock_server)
        .await;

    let feed = MonobankProvider::new(&mock_server.uri());
    let store = RateStore::new(feed, DEFAULT_TTL);

    store.get_snapshot(false).await;
    // Cached and fresh, but the user asked for a refresh.
    let state = store.get_snapshot(true).await;
    assert!(!state.is_stale);
}
