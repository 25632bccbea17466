//! Monthly time-series payloads

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `trends-timeline` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelinePayload {
    pub timeline: Timeline,
}

/// Category mention counts per month, keyed by category name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub months: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    /// `None` marks a month with no reading
    pub series: BTreeMap<String, Vec<Option<u64>>>,
}

/// One growth record from `emerging-trends`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendChange {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub growth_rate: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub current_count: u64,
}

impl TrendChange {
    /// Tooltip title used by ranked growth charts
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

/// `emerging-trends` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmergingTrends {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub emerging: Vec<TrendChange>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub declining: Vec<TrendChange>,
    #[serde(default)]
    pub analysis_period: Option<String>,
    /// Set when the backend had too few months to compare
    #[serde(default)]
    pub message: Option<String>,
}

/// One tracked entity in a dynamics payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicsSeries {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub data: Vec<Option<u64>>,
    #[serde(default)]
    pub growth_rate: Option<f64>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl DynamicsSeries {
    /// Legend label: `"Name (+12.5%)"` when a growth rate is known
    pub fn label(&self) -> String {
        match self.growth_rate {
            Some(rate) => format!("{} (+{}%)", self.name, rate),
            None => self.name.clone(),
        }
    }
}

/// `*-dynamics` body shared by trends, colors, materials and top items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dynamics {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub months: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub series: Vec<DynamicsSeries>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Dynamics {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty() || self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Payload;
    use serde_json::json;

    #[test]
    fn test_series_label_with_growth() {
        let series = DynamicsSeries {
            name: "Loafers".to_string(),
            growth_rate: Some(150.0),
            ..Default::default()
        };
        assert_eq!(series.label(), "Loafers (+150%)");

        let series = DynamicsSeries {
            name: "Blazer".to_string(),
            growth_rate: Some(33.3),
            ..Default::default()
        };
        assert_eq!(series.label(), "Blazer (+33.3%)");
    }

    #[test]
    fn test_series_label_without_growth() {
        let series = DynamicsSeries {
            name: "Sneakers (White)".to_string(),
            total_count: Some(42),
            ..Default::default()
        };
        assert_eq!(series.label(), "Sneakers (White)");
    }

    #[test]
    fn test_dynamics_decodes_sparse_reply() {
        let value = json!({
            "success": true,
            "months": [],
            "series": [],
            "message": "not enough data"
        });
        let dynamics = Payload::<Dynamics>::from_value(&value).ready().unwrap();
        assert!(dynamics.is_empty());
        assert_eq!(dynamics.message.as_deref(), Some("not enough data"));
    }

    #[test]
    fn test_timeline_decodes_series_map() {
        let value = json!({
            "success": true,
            "timeline": {
                "months": ["2024-01", "2024-02"],
                "series": {"Footwear": [3, 5], "Clothing": [10, 12]}
            }
        });
        let payload = Payload::<TimelinePayload>::from_value(&value).ready().unwrap();
        let keys: Vec<_> = payload.timeline.series.keys().cloned().collect();
        assert_eq!(keys, vec!["Clothing", "Footwear"]);
    }

    #[test]
    fn test_null_points_are_kept_as_gaps() {
        let value = json!({
            "success": true,
            "months": ["2024-01", "2024-02"],
            "series": [{"name": "Red", "data": [null, 4], "growth_rate": null}]
        });
        let dynamics = Payload::<Dynamics>::from_value(&value).ready().unwrap();
        assert_eq!(dynamics.series[0].data, vec![None, Some(4)]);
        assert_eq!(dynamics.series[0].label(), "Red");

        let value = json!({
            "success": true,
            "timeline": {"months": ["2024-01"], "series": {"Clothing": [null]}}
        });
        let payload = Payload::<TimelinePayload>::from_value(&value).ready().unwrap();
        assert_eq!(payload.timeline.series["Clothing"], vec![None]);
    }
}
