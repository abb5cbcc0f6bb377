use crate::common::{API_KEY, client_for, fixture, mock_chart, setup_server};
use chrono::NaiveDate;
use chrono_tz::Tz;
use httpmock::Method::GET;
use yhf::{Interval, Range, Ticker};

#[tokio::test]
async fn stock_data_sends_params_and_returns_raw_json() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .header("x-api-key", API_KEY)
            .header("accept", "application/json")
            .query_param("range", "5d")
            .query_param("interval", "1wk")
            .query_param("includeComparisons", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("chart", "AAPL", "json"));
    });

    let client = client_for(&server);
    let raw = Ticker::new(&client, "AAPL")
        .stock_data(Range::D5, Interval::W1, false)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(raw["chart"]["result"][0]["meta"]["symbol"], "AAPL");
    assert_eq!(raw["chart"]["result"][0]["meta"]["priceHint"], 2);
}

#[tokio::test]
async fn chart_builder_defaults_include_comparisons() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "1mo")
            .query_param("interval", "1d")
            .query_param("includeComparisons", "true");
        then.status(200).body(fixture("chart", "AAPL", "json"));
    });

    let client = client_for(&server);
    let chart = yhf::ChartBuilder::new(&client, "AAPL").fetch().await.unwrap();
    mock.assert();
    assert_eq!(chart.comparisons().len(), 2);
}

#[tokio::test]
async fn meta_uses_one_day_range() {
    let server = setup_server();
    let mock = mock_chart(&server, "AAPL", "1d");

    let client = client_for(&server);
    let meta = Ticker::new(&client, "AAPL").meta().await.unwrap();
    mock.assert();

    assert_eq!(meta.symbol.as_deref(), Some("AAPL"));
    assert_eq!(meta.currency.as_deref(), Some("USD"));
    assert_eq!(meta.exchange_name.as_deref(), Some("NMS"));
    assert_eq!(meta.exchange_timezone, Some(Tz::America__New_York));
    assert_eq!(meta.regular_market_price, Some(217.53));
    assert_eq!(meta.previous_close, Some(218.54));
    assert_eq!(meta.regular_market_volume, Some(37_992_400));
    assert_eq!(meta.valid_ranges.len(), 11);
    assert_eq!(meta.extra.get("priceHint"), Some(&serde_json::json!(2)));
    assert_eq!(
        meta.first_trade_date.map(|d| d.date_naive()),
        NaiveDate::from_ymd_opt(1980, 12, 12)
    );
}

#[tokio::test]
async fn price_reads_regular_market_price() {
    let server = setup_server();
    let _mock = mock_chart(&server, "AAPL", "1d");

    let client = client_for(&server);
    let price = Ticker::new(&client, "AAPL").price().await.unwrap();
    assert_eq!(price, 217.53);
}

#[tokio::test]
async fn price_history_keeps_null_gaps() {
    let server = setup_server();
    let _mock = mock_chart(&server, "AAPL", "1mo");

    let client = client_for(&server);
    let history = Ticker::new(&client, "AAPL")
        .price_history(Range::M1)
        .await
        .unwrap();

    assert_eq!(history.len(), 5);
    assert_eq!(history.timestamp.len(), 5);
    assert_eq!(history.open[0], Some(219.15));
    assert_eq!(history.close[3], None);
    assert_eq!(history.volume[3], None);
    assert_eq!(history.volume[4], Some(47_161_100));
}

#[tokio::test]
async fn comparisons_are_keyed_by_symbol() {
    let server = setup_server();
    let _mock = mock_chart(&server, "AAPL", "3mo");

    let client = client_for(&server);
    let comps = Ticker::new(&client, "AAPL")
        .comparisons(Range::M3)
        .await
        .unwrap();

    let keys: Vec<_> = comps.keys().map(String::as_str).collect();
    assert_eq!(keys, ["MSFT", "^GSPC"]);
    assert_eq!(comps["^GSPC"].close[0], Some(5346.56));
    assert_eq!(comps["MSFT"].high[3], None);
}

#[tokio::test]
async fn dividends_convert_timestamp_keys() {
    let server = setup_server();
    let _mock = mock_chart(&server, "AAPL", "1y");

    let client = client_for(&server);
    let divs = Ticker::new(&client, "AAPL")
        .dividends(Range::Y1)
        .await
        .unwrap();

    assert_eq!(divs.len(), 1);
    assert_eq!(divs[0].amount, 0.25);
    assert_eq!(divs[0].date.date_naive(), NaiveDate::from_ymd_opt(2024, 8, 12).unwrap());
}

#[tokio::test]
async fn trading_periods_and_market_range() {
    let server = setup_server();
    let mock = mock_chart(&server, "AAPL", "1d");

    let client = client_for(&server);
    let ticker = Ticker::new(&client, "AAPL");

    let periods = ticker.trading_periods().await.unwrap();
    let regular = periods.regular.unwrap();
    assert_eq!(regular.start.unwrap().timestamp(), 1_723_469_400);
    assert_eq!(regular.end.unwrap().timestamp(), 1_723_492_800);
    assert_eq!(regular.gmtoffset, Some(-14_400));
    assert_eq!(periods.pre.unwrap().end, regular.start);
    assert!(periods.post.is_some());

    let range = ticker.market_range().await.unwrap();
    assert_eq!(range.fifty_two_week_high, 237.23);
    assert_eq!(range.fifty_two_week_low, 164.08);

    mock.assert_hits(2);
}
