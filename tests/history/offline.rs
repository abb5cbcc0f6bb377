use crate::common::{API_KEY, client_for, fixture, mock_history, setup_server};
use httpmock::Method::GET;
use yhf::{HistoryBuilder, Interval, Range, Ticker};

#[tokio::test]
async fn history_sends_symbol_as_query_param() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart")
            .header("x-api-key", API_KEY)
            .query_param("symbol", "AAPL")
            .query_param("interval", "1wk")
            .query_param("range", "3mo");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history", "AAPL", "json"));
    });

    let client = client_for(&server);
    let raw = HistoryBuilder::new(&client, "AAPL")
        .interval(Interval::W1)
        .range(Range::M3)
        .fetch_raw()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(raw["chart"]["result"][0]["meta"]["dataGranularity"], "1wk");
}

#[tokio::test]
async fn history_defaults_to_daily_month() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart")
            .query_param("symbol", "AAPL")
            .query_param("interval", "1d")
            .query_param("range", "1mo");
        then.status(200).body(fixture("history", "AAPL", "json"));
    });

    let client = client_for(&server);
    HistoryBuilder::new(&client, "AAPL").fetch().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn candles_skip_rows_without_close() {
    let server = setup_server();
    let _mock = mock_history(&server, "AAPL");

    let client = client_for(&server);
    let candles = Ticker::new(&client, "AAPL")
        .history(Interval::W1, Range::M3)
        .await
        .unwrap();

    assert_eq!(candles.len(), 3);
    assert_eq!(candles[0].ts, 1_721_001_600);
    assert_eq!(candles[0].open, Some(236.48));
    assert_eq!(candles[0].close, 224.31);
    assert_eq!(candles[2].close, 216.24);
    assert_eq!(candles[2].volume, Some(281_473_000));
    assert_eq!(
        candles[0].datetime_utc().unwrap().to_rfc3339(),
        "2024-07-15T00:00:00+00:00"
    );
}
