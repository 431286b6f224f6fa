use async_trait::async_trait;
use crate::{FeedError, NewsCategory, NewsItem};

/// Trait for remote news sources
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn market_news(&self, category: NewsCategory) -> Result<Vec<NewsItem>, FeedError>;
}
