//! feed-loader: Fetch the dashboard news feed once and log what came back.
//!
//! Smoke tool for the feed pipeline: loads config, initializes logging,
//! performs one fetch pass, and reports per-section counts.
//!
//! Usage:
//!   cargo run -p feed-loader
//!   cargo run -p feed-loader -- --demo    # skip the network, use curated data

use news_feed::{demo, FinnhubClient, NewsFeedService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feed_loader=info,news_feed=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let use_demo = args.iter().any(|a| a == "--demo");

    let data = if use_demo {
        demo::news_data()
    } else {
        let client = FinnhubClient::from_env()?;
        let service = NewsFeedService::new(client);
        service.dashboard_data_or_demo().await
    };

    tracing::info!("global news: {} items", data.global.len());
    tracing::info!("financial news: {} items", data.financial.len());
    tracing::info!("trending stocks: {}", data.trending_stocks.len());
    tracing::info!("sectors: {}", data.sectors.len());

    for item in data.global.iter().chain(data.financial.iter()) {
        tracing::info!(
            "[{}] {} ({}, {})",
            item.sentiment.as_str(),
            item.title,
            item.source,
            item.published_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}
