//! Cached dashboard feed assembly.

use chrono::{DateTime, Utc};
use dashboard_core::{FeedError, NewsCategory, NewsData, NewsSource};
use dashmap::DashMap;

use crate::demo;

/// Internal cache entry with timestamp
struct CacheEntry {
    data: NewsData,
    cached_at: DateTime<Utc>,
}

/// Staleness window: a cached payload this old is refetched
const CACHE_TTL_SECS: i64 = 300; // 5 minutes

const CACHE_KEY: &str = "dashboard";

/// Caching front for the news source. Serves the assembled dashboard payload
/// from cache while fresh and only reaches the remote source after the
/// staleness window has passed or the entry was invalidated.
pub struct NewsFeedService<S: NewsSource> {
    source: S,
    cache: DashMap<&'static str, CacheEntry>,
}

impl<S: NewsSource> NewsFeedService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: DashMap::new(),
        }
    }

    /// Dashboard payload, cached for five minutes. Source failures propagate.
    pub async fn dashboard_data(&self) -> Result<NewsData, FeedError> {
        if let Some(entry) = self.cache.get(CACHE_KEY) {
            let age = (Utc::now() - entry.cached_at).num_seconds();
            if age < CACHE_TTL_SECS {
                return Ok(entry.data.clone());
            }
        }

        let (global, financial) = tokio::join!(
            self.source.market_news(NewsCategory::General),
            self.source.market_news(NewsCategory::Forex),
        );
        let global = global?;
        let financial = financial?;

        let (trending_stocks, sectors) = demo::trending_and_sectors();
        let data = NewsData {
            global,
            financial,
            trending_stocks,
            sectors,
        };

        self.cache.insert(
            CACHE_KEY,
            CacheEntry {
                data: data.clone(),
                cached_at: Utc::now(),
            },
        );

        Ok(data)
    }

    /// Same as [`Self::dashboard_data`], degrading to the curated dataset
    /// when the source fails.
    pub async fn dashboard_data_or_demo(&self) -> NewsData {
        match self.dashboard_data().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("news fetch failed, serving demo data: {}", e);
                demo::news_data()
            }
        }
    }

    /// Drop the cached payload so the next read refetches.
    pub fn invalidate(&self) {
        self.cache.remove(CACHE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dashboard_core::{NewsItem, Sentiment};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl NewsSource for StubSource {
        async fn market_news(&self, category: NewsCategory) -> Result<Vec<NewsItem>, FeedError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FeedError::Api("stub offline".to_string()));
            }
            Ok(vec![NewsItem {
                id: format!("stub-{}", category.as_query()),
                title: "stub headline".to_string(),
                excerpt: "stub excerpt".to_string(),
                category: category.label().to_string(),
                published_at: Utc::now(),
                source: "stub".to_string(),
                image: "/og-image.png".to_string(),
                url: "#".to_string(),
                sentiment: Sentiment::Neutral,
                tickers: vec![],
            }])
        }
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_the_source() {
        let service = NewsFeedService::new(StubSource::new(false));

        let first = service.dashboard_data().await.unwrap();
        assert_eq!(first.global.len(), 1);
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 2);

        let second = service.dashboard_data().await.unwrap();
        assert_eq!(second.financial.len(), 1);
        // Both categories still only fetched once
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let service = NewsFeedService::new(StubSource::new(false));

        service.dashboard_data().await.unwrap();
        service.invalidate();
        service.dashboard_data().await.unwrap();

        assert_eq!(service.source.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        let service = NewsFeedService::new(StubSource::new(true));

        assert!(service.dashboard_data().await.is_err());
    }

    #[tokio::test]
    async fn test_failure_degrades_to_demo_payload() {
        let service = NewsFeedService::new(StubSource::new(true));

        let data = service.dashboard_data_or_demo().await;
        assert!(!data.global.is_empty());
        assert_eq!(data.trending_stocks.len(), 5);
    }

    #[tokio::test]
    async fn test_payload_carries_trending_and_sectors() {
        let service = NewsFeedService::new(StubSource::new(false));

        let data = service.dashboard_data().await.unwrap();
        assert!(!data.trending_stocks.is_empty());
        assert!(!data.sectors.is_empty());
    }
}
