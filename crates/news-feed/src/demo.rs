//! Curated fallback dataset served when the remote source is unavailable.
//! Also the only source of trending-stock and sector summaries, which the
//! dashboard does not fetch remotely.

use chrono::Utc;
use dashboard_core::{NewsData, NewsItem, SectorData, SectorStock, Sentiment, TrendingStock};

fn item(
    id: &str,
    title: &str,
    excerpt: &str,
    category: &str,
    source: &str,
    sentiment: Sentiment,
    tickers: &[&str],
) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category: category.to_string(),
        published_at: Utc::now(),
        source: source.to_string(),
        image: "/og-image.png".to_string(),
        url: "#".to_string(),
        sentiment,
        tickers: tickers.iter().map(|t| t.to_string()).collect(),
    }
}

fn stock(symbol: &str, name: &str, change: f64) -> SectorStock {
    SectorStock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        change,
    }
}

pub fn global_items() -> Vec<NewsItem> {
    vec![
        item(
            "demo-global-1",
            "RBI Keeps Repo Rate Unchanged at 6.5%",
            "Reserve Bank of India maintains accommodative stance amid inflation concerns and global economic uncertainty.",
            "Economy",
            "Economic Times",
            Sentiment::Neutral,
            &["RBI"],
        ),
        item(
            "demo-global-2",
            "India GDP Growth Expected at 6.3% for FY24",
            "Government economic survey projects steady growth driven by domestic consumption and investment recovery.",
            "Economy",
            "Business Standard",
            Sentiment::Bullish,
            &[],
        ),
        item(
            "demo-global-3",
            "Monsoon Forecast Positive for Agricultural Sector",
            "IMD predicts normal monsoon, boosting hopes for agricultural output and rural demand recovery.",
            "Agriculture",
            "Hindu BusinessLine",
            Sentiment::Bullish,
            &[],
        ),
        item(
            "demo-global-4",
            "Foreign Portfolio Investment Flows Turn Positive",
            "FPIs invest Rs 15,000 crores in Indian markets this month after three months of outflows.",
            "Investment",
            "Mint",
            Sentiment::Bullish,
            &[],
        ),
    ]
}

pub fn financial_items() -> Vec<NewsItem> {
    vec![
        item(
            "demo-financial-1",
            "Sensex Hits New All-Time High Above 73,000",
            "BSE Sensex reaches record levels driven by strong earnings and positive global sentiment.",
            "Stock Market",
            "CNBC TV18",
            Sentiment::Bullish,
            &["SENSEX", "TCS", "RELIANCE"],
        ),
        item(
            "demo-financial-2",
            "TCS Announces Rs 18,000 Crore Share Buyback",
            "India's largest IT services company announces significant shareholder return program.",
            "Corporate Action",
            "Financial Express",
            Sentiment::Bullish,
            &["TCS"],
        ),
        item(
            "demo-financial-3",
            "HDFC Bank-HDFC Merger Creates Banking Giant",
            "Successful merger creates India's largest private sector bank with enhanced market position.",
            "Banking",
            "Moneycontrol",
            Sentiment::Neutral,
            &["HDFCBANK"],
        ),
    ]
}

/// Trending stocks and sector summaries shown beside the feed.
pub fn trending_and_sectors() -> (Vec<TrendingStock>, Vec<SectorData>) {
    let trending = vec![
        TrendingStock {
            symbol: "TCS".to_string(),
            name: "Tata Consultancy Services".to_string(),
            change: 2.45,
            sentiment: Sentiment::Bullish,
            headlines: vec![
                "TCS Reports Strong Q3 Results".to_string(),
                "TCS Wins Major Banking Deal in Europe".to_string(),
            ],
        },
        TrendingStock {
            symbol: "RELIANCE".to_string(),
            name: "Reliance Industries".to_string(),
            change: -1.23,
            sentiment: Sentiment::Bearish,
            headlines: vec![
                "Reliance Retail Expansion Plans".to_string(),
                "Oil Price Impact on Reliance".to_string(),
            ],
        },
        TrendingStock {
            symbol: "INFY".to_string(),
            name: "Infosys Limited".to_string(),
            change: 3.12,
            sentiment: Sentiment::Bullish,
            headlines: vec![
                "Infosys AI Platform Launch".to_string(),
                "Strong Digital Transformation Growth".to_string(),
            ],
        },
        TrendingStock {
            symbol: "HDFCBANK".to_string(),
            name: "HDFC Bank Limited".to_string(),
            change: 0.87,
            sentiment: Sentiment::Neutral,
            headlines: vec![
                "HDFC Bank Merger Updates".to_string(),
                "Digital Banking Initiatives".to_string(),
            ],
        },
        TrendingStock {
            symbol: "BHARTIARTL".to_string(),
            name: "Bharti Airtel Limited".to_string(),
            change: 1.95,
            sentiment: Sentiment::Bullish,
            headlines: vec![
                "5G Rollout Acceleration".to_string(),
                "Africa Operations Growth".to_string(),
            ],
        },
    ];

    let sectors = vec![
        SectorData {
            name: "Information Technology".to_string(),
            change: 2.8,
            sentiment: Sentiment::Bullish,
            top_stocks: vec![
                stock("TCS", "Tata Consultancy Services", 2.45),
                stock("INFY", "Infosys Limited", 3.12),
            ],
        },
        SectorData {
            name: "Banking & Financial Services".to_string(),
            change: 1.2,
            sentiment: Sentiment::Neutral,
            top_stocks: vec![
                stock("HDFCBANK", "HDFC Bank Limited", 0.87),
                stock("ICICIBANK", "ICICI Bank Limited", 1.45),
            ],
        },
        SectorData {
            name: "Oil & Gas".to_string(),
            change: -0.65,
            sentiment: Sentiment::Bearish,
            top_stocks: vec![
                stock("RELIANCE", "Reliance Industries", -1.23),
                stock("ONGC", "Oil & Natural Gas Corp", -0.89),
            ],
        },
    ];

    (trending, sectors)
}

/// Full dashboard payload for offline and demo use.
pub fn news_data() -> NewsData {
    let (trending_stocks, sectors) = trending_and_sectors();
    NewsData {
        global: global_items(),
        financial: financial_items(),
        trending_stocks,
        sectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_payload_fills_every_section() {
        let data = news_data();
        assert!(!data.global.is_empty());
        assert!(!data.financial.is_empty());
        assert_eq!(data.trending_stocks.len(), 5);
        assert_eq!(data.sectors.len(), 3);
    }

    #[test]
    fn test_sector_summaries_carry_top_stocks() {
        let (_, sectors) = trending_and_sectors();
        assert!(sectors.iter().all(|s| !s.top_stocks.is_empty()));
    }
}
