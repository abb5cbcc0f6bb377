use crate::common::{client_for, setup_server};
use httpmock::Method::GET;
use yhf::{Ticker, YhfError};

#[tokio::test]
async fn chart_401_maps_to_unauthorized() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"message":"Invalid API key"}"#);
    });

    let client = client_for(&server);
    let err = Ticker::new(&client, "AAPL").price().await.unwrap_err();
    mock.assert();

    match err {
        YhfError::Unauthorized { url } => assert!(url.contains("/v8/finance/chart/AAPL")),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn chart_500_maps_to_server_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/FAIL");
        then.status(500).body("oops");
    });

    let client = client_for(&server);
    let err = Ticker::new(&client, "FAIL").meta().await.unwrap_err();
    mock.assert();

    match err {
        YhfError::ServerError { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("range=1d"));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn chart_error_payload_maps_to_api_error() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOPE");
        then.status(200).body(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        );
    });

    let client = client_for(&server);
    match Ticker::new(&client, "NOPE").market_range().await {
        Err(YhfError::Api { code, .. }) => assert_eq!(code, "Not Found"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn failures_can_fall_back_to_empty_values() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/DOWN");
        then.status(503);
    });

    let client = client_for(&server);
    let ticker = Ticker::new(&client, "DOWN");

    assert_eq!(ticker.price().await.unwrap_or_default(), 0.0);
    assert!(ticker.dividends(yhf::Range::M1).await.unwrap_or_default().is_empty());
    assert_eq!(ticker.meta().await.unwrap_or_default(), yhf::StockMeta::default());
}
