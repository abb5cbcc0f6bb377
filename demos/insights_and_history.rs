use yhf::{HistoryBuilder, InsightsBuilder, Interval, Range, YhfClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = YhfClient::from_env()?;

    println!("--- Weekly candles for MSFT (3 months) ---");
    let candles = HistoryBuilder::new(&client, "MSFT")
        .interval(Interval::W1)
        .range(Range::M3)
        .fetch()
        .await?;
    for c in candles.iter().take(5) {
        println!(
            "{:?}  O:{:?} H:{:?} L:{:?} C:{:.2} V:{:?}",
            c.datetime_utc(),
            c.open,
            c.high,
            c.low,
            c.close,
            c.volume
        );
    }
    println!();

    println!("--- Insights for MSFT ---");
    let insights = InsightsBuilder::new(&client, "MSFT").fetch().await?;
    for (label, outlook) in [
        ("short", &insights.short_term),
        ("intermediate", &insights.intermediate_term),
        ("long", &insights.long_term),
    ] {
        if let Some(o) = outlook {
            println!(
                "{label:>12}: {} ({})",
                o.direction.as_deref().unwrap_or("n/a"),
                o.score_description.as_deref().unwrap_or("")
            );
        }
    }
    if let Some(rec) = &insights.recommendation {
        println!(
            "Recommendation: {} target {:?}",
            rec.rating.as_deref().unwrap_or("n/a"),
            rec.target_price
        );
    }

    // The raw payload is available too.
    let raw = InsightsBuilder::new(&client, "MSFT").fetch_raw().await?;
    let keys = raw["finance"]["result"]
        .as_object()
        .map(|o| o.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    println!("\nRaw result keys: {keys:?}");

    Ok(())
}
