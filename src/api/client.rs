//! HTTP client for the news and watchlist endpoints.

use super::NewsSource;
use super::schema;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::state::{NewsItem, Stock};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};

/// High-level API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Configuration.
    config: ApiConfig,
    /// Shared HTTP connection pool.
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("cointrack/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, http })
    }

    /// Whether a remote watchlist endpoint is configured.
    pub fn has_stocks_endpoint(&self) -> bool {
        self.config.stocks_url.is_some()
    }

    /// Fetch the remote watchlist.
    pub async fn fetch_stocks(&self) -> Result<Vec<Stock>> {
        let url = self
            .config
            .stocks_url
            .as_deref()
            .ok_or_else(|| Error::config("stocks_url is not configured"))?;

        let body = self.get_text(self.http.get(url)).await?;
        schema::parse_stock_list(&body)
    }

    async fn get_text(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let start = Instant::now();
        let response = request
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let url = response.url().clone();
        if !status.is_success() {
            tracing::warn!(
                %url,
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis(),
                "Request failed"
            );
            return Err(Error::network(format!("{url} returned {status}")));
        }

        let body = response.text().await?;
        tracing::debug!(
            %url,
            duration_ms = start.elapsed().as_millis(),
            bytes = body.len(),
            "Request completed"
        );
        Ok(body)
    }
}

#[async_trait]
impl NewsSource for ApiClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<NewsItem>> {
        let url = self
            .config
            .news_url
            .as_deref()
            .ok_or_else(|| Error::config("news_url is not configured"))?;

        let body = self
            .get_text(self.http.get(url).query(&[("page", page)]))
            .await?;
        schema::parse_news_page(&body, self.config.malformed_items)
    }
}
