use yhf::{Range, Ticker, YhfClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build a client from YHF_API_KEY (and optional YHF_BASE_URL).
    let client = YhfClient::from_env()?;
    let aapl = Ticker::new(&client, "AAPL");

    // 2. Metadata and price from a one-day chart.
    let meta = aapl.meta().await?;
    println!(
        "{} on {} ({})",
        meta.symbol.unwrap_or_default(),
        meta.full_exchange_name.unwrap_or_default(),
        meta.currency.unwrap_or_default()
    );
    println!("Last price: {:.2}", aapl.price().await?);

    let range = aapl.market_range().await?;
    println!(
        "52 week range: {:.2} - {:.2}",
        range.fifty_two_week_low, range.fifty_two_week_high
    );

    // 3. Sessions of the current trading day.
    let periods = aapl.trading_periods().await?;
    if let Some(regular) = periods.regular {
        println!("Regular session: {:?} -> {:?}", regular.start, regular.end);
    }

    // 4. Dividends over the past year; failures fall back to an empty list.
    let dividends = aapl.dividends(Range::Y1).await.unwrap_or_default();
    for d in &dividends {
        println!("Dividend {} : {:.4}", d.date.date_naive(), d.amount);
    }

    // 5. Comparison series returned alongside the chart.
    for (symbol, series) in aapl.comparisons(Range::M1).await? {
        let last = series.close.iter().rev().flatten().next();
        println!("Compared with {symbol}: last close {last:?}");
    }

    // 6. Earnings window from the quote endpoint.
    let earnings = aapl.earnings().await?;
    println!(
        "Next earnings window: {:?} -> {:?} (last reported {})",
        earnings.start_datetime(),
        earnings.end_datetime(),
        earnings.earnings_date.date_naive()
    );

    Ok(())
}
