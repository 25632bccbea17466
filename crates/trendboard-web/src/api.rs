//! Browser fetcher for the analytics endpoints

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use trendboard_core::{CoreError, Fetcher};

/// Same-origin `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooFetcher;

#[async_trait(?Send)]
impl Fetcher for GlooFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, CoreError> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| CoreError::network(path, e))?;

        if !response.ok() {
            return Err(CoreError::HttpStatus {
                path: path.to_string(),
                status: response.status(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| CoreError::decode(path, e))
    }
}
