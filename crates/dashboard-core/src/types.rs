use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Market mood attached to news items, trending stocks, and sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    /// Convert to numeric score (-1.0 to 1.0)
    pub fn to_score(&self) -> f64 {
        match self {
            Sentiment::Bullish => 1.0,
            Sentiment::Bearish => -1.0,
            Sentiment::Neutral => 0.0,
        }
    }

    /// Create from numeric score
    pub fn from_score(score: f64) -> Self {
        if score >= 0.2 {
            Sentiment::Bullish
        } else if score <= -0.2 {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Bearish => "bearish",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Icon name for the render boundary
    pub fn icon(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "arrow-up-right",
            Sentiment::Bearish => "arrow-down-right",
            Sentiment::Neutral => "minus",
        }
    }

    /// Badge styling (background + text + border)
    pub fn badge_class(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bg-green-500/10 text-green-500 border-green-500/20",
            Sentiment::Bearish => "bg-red-500/10 text-red-500 border-red-500/20",
            Sentiment::Neutral => "bg-gray-500/10 text-gray-500 border-gray-500/20",
        }
    }

    /// Plain text styling
    pub fn text_class(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "text-green-500",
            Sentiment::Bearish => "text-red-500",
            Sentiment::Neutral => "text-gray-500",
        }
    }
}

/// Category of the remote news feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsCategory {
    /// General market news
    General,

    /// Forex / financial markets news
    Forex,
}

impl NewsCategory {
    /// Query value for the news endpoint
    pub fn as_query(&self) -> &'static str {
        match self {
            NewsCategory::General => "general",
            NewsCategory::Forex => "forex",
        }
    }

    /// Display label attached to normalized items
    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::General => "Global Economy",
            NewsCategory::Forex => "Financial Markets",
        }
    }
}

/// Normalized news article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
    pub image: String,
    pub url: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub tickers: Vec<String>,
}

/// Stock currently drawing unusual attention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingStock {
    pub symbol: String,
    pub name: String,
    /// Percent change on the day
    pub change: f64,
    pub sentiment: Sentiment,
    pub headlines: Vec<String>,
}

/// Constituent shown inside a sector summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorStock {
    pub symbol: String,
    pub name: String,
    pub change: f64,
}

/// Sector-level market summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorData {
    pub name: String,
    pub change: f64,
    pub sentiment: Sentiment,
    pub top_stocks: Vec<SectorStock>,
}

/// Full dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsData {
    pub global: Vec<NewsItem>,
    pub financial: Vec<NewsItem>,
    pub trending_stocks: Vec<TrendingStock>,
    pub sectors: Vec<SectorData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_score_round_trip() {
        assert_eq!(Sentiment::from_score(Sentiment::Bullish.to_score()), Sentiment::Bullish);
        assert_eq!(Sentiment::from_score(Sentiment::Bearish.to_score()), Sentiment::Bearish);
        assert_eq!(Sentiment::from_score(Sentiment::Neutral.to_score()), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_styles_distinct() {
        let variants = [Sentiment::Bullish, Sentiment::Bearish, Sentiment::Neutral];
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a.icon(), b.icon());
                assert_ne!(a.badge_class(), b.badge_class());
                assert_ne!(a.text_class(), b.text_class());
            }
        }
    }
}
