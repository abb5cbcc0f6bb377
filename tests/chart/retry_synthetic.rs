use httpmock::Method::GET;
use httpmock::MockServer;
use std::time::Duration;
use url::Url;
use yhf::{Backoff, RetryConfig, Ticker, YhfClient, YhfError};

#[tokio::test]
async fn chart_retries_on_persistent_5xx() {
    let server = MockServer::start();
    let sym = "RETRY";

    let fail_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{}", sym))
            .query_param("range", "1d");
        then.status(503).body("Service Unavailable");
    });

    let max_retries = 3;
    let retry = RetryConfig {
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(1)),
        ..RetryConfig::default()
    };

    let client = YhfClient::builder()
        .api_key("k")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(retry)
        .build()
        .unwrap();

    let result = Ticker::new(&client, sym).price().await;

    // 1 initial attempt + 3 retries.
    fail_mock.assert_hits((1 + max_retries) as usize);

    match result {
        Err(YhfError::ServerError { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected ServerError after retries, got {other:?}"),
    }
}

#[tokio::test]
async fn ticker_retry_override_disables_retries() {
    let server = MockServer::start();

    let fail_mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/ONCE");
        then.status(429);
    });

    let client = YhfClient::builder()
        .api_key("k")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap();

    let err = Ticker::new(&client, "ONCE")
        .retry_policy(Some(RetryConfig::disabled()))
        .price()
        .await
        .unwrap_err();

    fail_mock.assert_hits(1);
    assert!(matches!(err, YhfError::RateLimited { .. }));
}

#[tokio::test]
async fn non_retryable_status_is_not_retried() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/GONE");
        then.status(404);
    });

    let client = YhfClient::builder()
        .api_key("k")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(RetryConfig {
            backoff: Backoff::Fixed(Duration::from_millis(1)),
            ..RetryConfig::default()
        })
        .build()
        .unwrap();

    let err = Ticker::new(&client, "GONE").meta().await.unwrap_err();
    mock.assert_hits(1);
    assert!(matches!(err, YhfError::NotFound { .. }));
}
