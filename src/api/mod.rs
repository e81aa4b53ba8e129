//! Remote data sources.
//!
//! This module provides the HTTP client for the news and watchlist
//! endpoints, the response schemas they are validated against, and the
//! loader that runs feed fetches in the background.

mod client;
mod loader;
mod schema;

pub use client::ApiClient;
pub use loader::NewsLoader;
pub use schema::{parse_news_page, parse_stock_list};

use crate::error::Result;
use crate::state::NewsItem;
use async_trait::async_trait;

/// A paginated source of news items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch one page (1-based). An empty page means the feed is exhausted.
    async fn fetch_page(&self, page: u32) -> Result<Vec<NewsItem>>;
}
