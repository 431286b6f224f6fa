//! Finnhub market-news client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashboard_core::{FeedError, NewsCategory, NewsItem, NewsSource};
use reqwest::Client;
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::sentiment;
use crate::tickers::extract_tickers;

const BASE_URL: &str = "https://finnhub.io/api/v1";

/// Items kept per category after normalization
const ITEMS_PER_CATEGORY: usize = 10;

/// Sliding-window rate limiter: at most `max_requests` per `window` duration.
#[derive(Clone)]
struct RateLimiter {
    timestamps: Arc<Mutex<VecDeque<Instant>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            timestamps: Arc::new(Mutex::new(VecDeque::new())),
            max_requests,
            window,
        }
    }

    async fn acquire(&self) {
        loop {
            let mut ts = self.timestamps.lock().await;
            let now = Instant::now();

            // Remove timestamps outside the window
            while let Some(&front) = ts.front() {
                if now.duration_since(front) >= self.window {
                    ts.pop_front();
                } else {
                    break;
                }
            }

            if ts.len() < self.max_requests {
                ts.push_back(now);
                return;
            }

            // Wait until the oldest request falls out of the window
            let wait_until = ts.front().unwrap().checked_add(self.window).unwrap();
            let sleep_dur = wait_until.duration_since(now) + Duration::from_millis(50);
            drop(ts);
            tracing::debug!(
                "Rate limiter: waiting {:.1}s for Finnhub API slot",
                sleep_dur.as_secs_f64()
            );
            tokio::time::sleep(sleep_dur).await;
        }
    }
}

/// Raw row from the /news endpoint
#[derive(Debug, Deserialize)]
struct FinnhubArticle {
    id: Option<i64>,
    headline: Option<String>,
    summary: Option<String>,
    datetime: Option<i64>,
    source: Option<String>,
    image: Option<String>,
    url: Option<String>,
}

#[derive(Clone)]
pub struct FinnhubClient {
    token: String,
    client: Client,
    rate_limiter: RateLimiter,
}

impl FinnhubClient {
    pub fn new(token: String) -> Self {
        // Free tier allows 60 req/min; paid plans raise this via env.
        let rate_limit: usize = std::env::var("FINNHUB_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            token,
            client,
            rate_limiter: RateLimiter::new(rate_limit, Duration::from_secs(60)),
        }
    }

    /// Build a client from the FINNHUB_API_KEY environment variable.
    pub fn from_env() -> Result<Self, FeedError> {
        let token = std::env::var("FINNHUB_API_KEY")
            .map_err(|_| FeedError::Api("FINNHUB_API_KEY must be set".to_string()))?;
        Ok(Self::new(token))
    }

    /// Send a request with rate limiting and automatic 429 retry.
    async fn send_request(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, FeedError> {
        let request = builder.build().map_err(|e| FeedError::Http(e.to_string()))?;

        for attempt in 0..3u32 {
            self.rate_limiter.acquire().await;
            let req_clone = request
                .try_clone()
                .ok_or_else(|| FeedError::Http("cannot clone request".to_string()))?;
            let response = self
                .client
                .execute(req_clone)
                .await
                .map_err(|e| FeedError::Http(e.to_string()))?;

            if response.status().as_u16() != 429 {
                return Ok(response);
            }

            let wait_secs = 5u64;
            tracing::warn!(
                "Finnhub 429 rate limited, waiting {}s before retry {}/3",
                wait_secs,
                attempt + 1
            );
            tokio::time::sleep(Duration::from_secs(wait_secs)).await;
        }

        Err(FeedError::Api(
            "rate limited by Finnhub after 3 retries".to_string(),
        ))
    }

    /// Fetch and normalize one category of market news.
    pub async fn fetch_category(
        &self,
        category: NewsCategory,
    ) -> Result<Vec<NewsItem>, FeedError> {
        let url = format!("{}/news", BASE_URL);

        let response = self
            .send_request(self.client.get(&url).query(&[
                ("category", category.as_query()),
                ("token", self.token.as_str()),
            ]))
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::Api(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let articles: Vec<FinnhubArticle> = response
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;

        Ok(articles
            .into_iter()
            .take(ITEMS_PER_CATEGORY)
            .enumerate()
            .map(|(i, raw)| normalize_article(raw, category, i))
            .collect())
    }
}

#[async_trait]
impl NewsSource for FinnhubClient {
    async fn market_news(&self, category: NewsCategory) -> Result<Vec<NewsItem>, FeedError> {
        self.fetch_category(category).await
    }
}

/// Map a raw Finnhub row into the dashboard shape, filling gaps the remote
/// feed routinely leaves (missing summaries, blank images, absent ids).
fn normalize_article(raw: FinnhubArticle, category: NewsCategory, index: usize) -> NewsItem {
    let title = raw
        .headline
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "No headline available".to_string());

    let excerpt = match raw.summary.filter(|s| !s.is_empty()) {
        Some(summary) => summary,
        None => {
            let mut cut: String = title.chars().take(150).collect();
            cut.push_str("...");
            cut
        }
    };

    let published_at = raw
        .datetime
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    let sentiment = sentiment::classify(&title, &excerpt);
    let tickers = extract_tickers(&title);

    NewsItem {
        id: raw
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| format!("finnhub-{}-{}", category.as_query(), index)),
        title,
        excerpt,
        category: category.label().to_string(),
        published_at,
        source: raw.source.filter(|s| !s.is_empty()).unwrap_or_else(|| "Finnhub".to_string()),
        image: raw.image.filter(|s| !s.is_empty()).unwrap_or_else(|| "/og-image.png".to_string()),
        url: raw.url.filter(|s| !s.is_empty()).unwrap_or_else(|| "#".to_string()),
        sentiment,
        tickers,
    }
}
