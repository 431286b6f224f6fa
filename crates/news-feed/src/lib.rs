//! News Feed
//!
//! Fetches dashboard news from Finnhub, normalizes articles into the shared
//! payload shape, classifies headline sentiment, and serves the assembled
//! dashboard payload through a five-minute TTL cache.

pub mod client;
pub mod demo;
pub mod sentiment;
pub mod service;
pub mod tickers;

pub use client::FinnhubClient;
pub use sentiment::{classify, keyword_score};
pub use service::NewsFeedService;
pub use tickers::extract_tickers;
