//! Native HTTP access to the analytics backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use trendboard_core::{CoreError, Fetcher};

/// reqwest-backed [`Fetcher`] rooted at the backend base URL
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("trendboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Absolute URL for a path such as `/api/analytics/colors-stats`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, CoreError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CoreError::network(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::HttpStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::network(path, e))?;
        serde_json::from_str(&body).map_err(|e| CoreError::decode(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let fetcher = HttpFetcher::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(fetcher.base(), "http://127.0.0.1:5000");
        assert_eq!(
            fetcher.url("/api/analytics/colors-stats"),
            "http://127.0.0.1:5000/api/analytics/colors-stats"
        );
    }
}
