use crate::common::{client_for, mock_insights, setup_server};
use chrono::NaiveDate;
use httpmock::Method::GET;
use yhf::{InsightsBuilder, Ticker, YhfError};

#[tokio::test]
async fn insights_raw_passthrough() {
    let server = setup_server();
    let mock = mock_insights(&server, "AAPL");

    let client = client_for(&server);
    let raw = InsightsBuilder::new(&client, "AAPL").fetch_raw().await.unwrap();
    mock.assert();

    assert_eq!(
        raw["finance"]["result"]["instrumentInfo"]["technicalEvents"]["sector"],
        "Technology"
    );
}

#[tokio::test]
async fn insights_decode_from_fixture() {
    let server = setup_server();
    let _mock = mock_insights(&server, "AAPL");

    let client = client_for(&server);
    let insights = Ticker::new(&client, "AAPL").insights().await.unwrap();

    assert_eq!(insights.symbol.as_deref(), Some("AAPL"));
    assert_eq!(
        insights.intermediate_term.unwrap().direction.as_deref(),
        Some("Bearish")
    );
    assert_eq!(insights.long_term.unwrap().score, Some(3.0));

    let tech = insights.key_technicals.unwrap();
    assert_eq!(tech.support, Some(196.0));
    assert_eq!(tech.stop_loss, Some(201.9));

    assert_eq!(
        insights.valuation.unwrap().description.as_deref(),
        Some("Overvalued")
    );
    assert_eq!(
        insights.recommendation.unwrap().provider.as_deref(),
        Some("Argus Research")
    );
    assert_eq!(
        insights.significant_developments[0].date,
        NaiveDate::from_ymd_opt(2024, 8, 1)
    );
}

#[tokio::test]
async fn insights_403_maps_to_unauthorized() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v6/finance/insights");
        then.status(403).body(r#"{"message":"Forbidden"}"#);
    });

    let client = client_for(&server);
    let err = InsightsBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(err, YhfError::Unauthorized { .. }));
}
