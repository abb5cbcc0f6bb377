use crate::common::{client_for, mock_quote, setup_server};
use chrono::NaiveDate;
use httpmock::Method::GET;
use yhf::{Ticker, YhfError};

#[tokio::test]
async fn quote_returns_raw_payload() {
    let server = setup_server();
    let mock = mock_quote(&server, "AAPL");

    let client = client_for(&server);
    let raw = Ticker::new(&client, "AAPL").quote().await.unwrap();
    mock.assert();

    let first = &raw["quoteResponse"]["result"][0];
    assert_eq!(first["shortName"], "Apple Inc.");
    assert_eq!(first["marketState"], "POST");
}

#[tokio::test]
async fn free_function_quote_matches_ticker() {
    let server = setup_server();
    let mock = mock_quote(&server, "AAPL");

    let client = client_for(&server);
    let via_fn = yhf::quote::quote(&client, "AAPL").await.unwrap();
    let via_ticker = Ticker::new(&client, "AAPL").quote().await.unwrap();
    mock.assert_hits(2);
    assert_eq!(via_fn, via_ticker);
}

#[tokio::test]
async fn earnings_extracts_timestamps() {
    let server = setup_server();
    let _mock = mock_quote(&server, "AAPL");

    let client = client_for(&server);
    let e = Ticker::new(&client, "AAPL").earnings().await.unwrap();

    assert_eq!(e.earnings_start, 1_730_372_340);
    assert_eq!(e.earnings_end, 1_730_721_600);
    assert_eq!(
        e.earnings_date.date_naive(),
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    );

    let via_fn = yhf::quote::earnings(&client, "AAPL").await.unwrap();
    assert_eq!(via_fn, e);
}

#[tokio::test]
async fn earnings_without_result_is_data_error() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v6/finance/quote/")
            .query_param("symbol", "NONE");
        then.status(200)
            .body(r#"{"quoteResponse":{"result":[],"error":null}}"#);
    });

    let client = client_for(&server);
    let err = Ticker::new(&client, "NONE").earnings().await.unwrap_err();
    assert!(matches!(err, YhfError::Data(_)));
}

#[tokio::test]
async fn quote_with_non_json_body_is_json_error() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v6/finance/quote/");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = client_for(&server);
    let err = Ticker::new(&client, "AAPL").quote().await.unwrap_err();
    assert!(matches!(err, YhfError::Json(_)));
}
