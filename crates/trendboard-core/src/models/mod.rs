//! Wire models for the analytics endpoints

pub mod dynamics;
pub mod gallery;
pub mod predictions;
pub mod stats;

pub use dynamics::{Dynamics, DynamicsSeries, EmergingTrends, Timeline, TimelinePayload, TrendChange};
pub use gallery::{GalleryImage, ItemGallery, ItemRef};
pub use predictions::{
    ColorPrediction, Combination, Insight, OverallMetrics, Recommendation, Recommendations,
    TrendPredictions,
};
pub use stats::{
    CategoriesStats, CategoryBreakdown, ColorsStats, MaterialsStats, NamedCount,
    StylesStats, SubcategoriesStats, SubcategoryCount, TopItemsStats,
};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read an explicit `null` as the field's default
///
/// `#[serde(default)]` only covers absent keys; scraped records often carry
/// `null` for counts and captions instead.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Tagged result of one analytics endpoint
///
/// Every endpoint replies with a `success` flag. A `false` flag is a
/// semantic failure: the chart fed by that payload is skipped, the rest of
/// the batch still renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// `success: true` and the body matched the expected record shape
    Ready(T),
    /// `success: false` (or flag missing)
    Failed { message: Option<String> },
    /// `success: true` but the body could not be read as `T`
    Malformed { message: String },
}

impl<T: DeserializeOwned> Payload<T> {
    /// Interpret a raw JSON reply
    pub fn from_value(value: &Value) -> Self {
        let success = value
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if !success {
            return Payload::Failed {
                message: value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            };
        }

        match T::deserialize(value) {
            Ok(body) => Payload::Ready(body),
            Err(e) => Payload::Malformed {
                message: e.to_string(),
            },
        }
    }
}

impl<T> Payload<T> {
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Payload::Ready(body) => Some(body),
            _ => None,
        }
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Payload::Ready(body) => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_ready() {
        let value = json!({
            "success": true,
            "categories": [{"name": "Clothing", "count": 12}]
        });
        let payload = Payload::<CategoriesStats>::from_value(&value);
        let body = payload.ready().unwrap();
        assert_eq!(body.categories.len(), 1);
        assert_eq!(body.categories[0].count, 12);
    }

    #[test]
    fn test_payload_failed_keeps_message() {
        let value = json!({"success": false, "message": "database unavailable"});
        let payload = Payload::<CategoriesStats>::from_value(&value);
        assert_eq!(
            payload,
            Payload::Failed {
                message: Some("database unavailable".to_string())
            }
        );
    }

    #[test]
    fn test_payload_without_flag_is_failure() {
        let value = json!({"categories": []});
        let payload = Payload::<CategoriesStats>::from_value(&value);
        assert!(matches!(payload, Payload::Failed { message: None }));
    }

    #[test]
    fn test_payload_malformed_body() {
        let value = json!({"success": true, "categories": "not-a-list"});
        let payload = Payload::<CategoriesStats>::from_value(&value);
        assert!(matches!(payload, Payload::Malformed { .. }));
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        let value = json!({"success": true, "colors": [{"name": "Red"}]});
        let body = Payload::<ColorsStats>::from_value(&value).ready().unwrap();
        assert_eq!(body.colors[0].count, 0);
    }

    #[test]
    fn test_null_count_degrades_to_zero() {
        let value = json!({"success": true, "categories": [
            {"name": "A", "count": 30},
            {"name": "B", "count": null},
            {"name": null, "count": 5}
        ]});
        let body = Payload::<CategoriesStats>::from_value(&value).ready().unwrap();
        assert_eq!(body.categories.len(), 3);
        assert_eq!(body.categories[1].count, 0);
        assert_eq!(body.categories[2].name, "");
        assert_eq!(body.total(), 35);
    }
}
