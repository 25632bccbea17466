//! Batch loader for analytics endpoints
//!
//! A batch requests every endpoint of a tab concurrently and succeeds only if
//! all requests do. The loader keeps no state between calls: the "load once"
//! guard belongs to [`crate::tabs::TabController`].

use crate::endpoint::{item_gallery_path, Endpoint};
use crate::error::CoreError;
use crate::models::{ItemGallery, ItemRef, Payload};
use async_trait::async_trait;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Source of raw JSON replies
///
/// Implementations must map transport failures to [`CoreError::Network`],
/// non-2xx replies to [`CoreError::HttpStatus`] and unparsable bodies to
/// [`CoreError::Decode`]. They must not retry.
#[async_trait(?Send)]
pub trait Fetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, CoreError>;
}

/// Raw replies of one successful batch, in request order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    entries: Vec<(Endpoint, Value)>,
}

impl Batch {
    pub fn new(entries: Vec<(Endpoint, Value)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn raw(&self, endpoint: Endpoint) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, v)| v)
    }

    /// Typed view of one reply; an endpoint outside the batch reads as failed
    pub fn payload<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Payload<T> {
        match self.raw(endpoint) {
            Some(value) => Payload::from_value(value),
            None => Payload::Failed {
                message: Some(format!("{} not part of this batch", endpoint)),
            },
        }
    }
}

impl Serialize for Batch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (endpoint, value) in &self.entries {
            map.serialize_entry(&endpoint.slug(), value)?;
        }
        map.end()
    }
}

/// Fetch every endpoint concurrently; the first failure fails the batch
pub async fn load_batch<F>(fetcher: &F, endpoints: &[Endpoint]) -> Result<Batch, CoreError>
where
    F: Fetcher + ?Sized,
{
    tracing::info!("Loading batch of {} endpoints", endpoints.len());

    let requests = endpoints.iter().map(|endpoint| async move {
        let path = endpoint.path();
        match fetcher.fetch_json(&path).await {
            Ok(value) => Ok((*endpoint, value)),
            Err(e) => {
                tracing::warn!(endpoint = %endpoint, error = %e, "Endpoint request failed");
                Err(e)
            }
        }
    });

    let entries = try_join_all(requests).await?;

    let semantic_failures = entries
        .iter()
        .filter(|(_, v)| !v.get("success").and_then(Value::as_bool).unwrap_or(false))
        .count();
    tracing::info!(
        endpoints = entries.len(),
        semantic_failures,
        "Batch loaded"
    );

    Ok(Batch::new(entries))
}

/// Images for one item; `success: false` comes back as [`Payload::Failed`]
pub async fn fetch_gallery<F>(fetcher: &F, item: &ItemRef) -> Result<Payload<ItemGallery>, CoreError>
where
    F: Fetcher + ?Sized,
{
    let path = item_gallery_path(item);
    tracing::debug!("Fetching gallery {}", path);
    let value = fetcher.fetch_json(&path).await?;
    Ok(Payload::from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoriesStats;
    use serde_json::json;

    #[test]
    fn test_batch_payload_lookup() {
        let batch = Batch::new(vec![(
            Endpoint::CategoriesStats,
            json!({"success": true, "categories": [{"name": "A", "count": 3}]}),
        )]);

        let stats = batch
            .payload::<CategoriesStats>(Endpoint::CategoriesStats)
            .ready()
            .unwrap();
        assert_eq!(stats.total(), 3);

        assert!(matches!(
            batch.payload::<CategoriesStats>(Endpoint::ColorsStats),
            Payload::Failed { .. }
        ));
    }

    #[test]
    fn test_batch_serializes_by_slug() {
        let batch = Batch::new(vec![
            (Endpoint::StylesStats, json!({"success": false})),
            (Endpoint::ColorsStats, json!({"success": true})),
        ]);
        let out = serde_json::to_value(&batch).unwrap();
        assert_eq!(out["styles-stats"]["success"], json!(false));
        assert_eq!(out["colors-stats"]["success"], json!(true));
    }
}
