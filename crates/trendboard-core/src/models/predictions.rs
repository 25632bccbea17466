//! Predictive metrics and recommendations

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorPrediction {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub predicted_score: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sample_size: u64,
}

/// `"Category + Color"` engagement pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub engagement_score: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sample_size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallMetrics {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub predicted_engagement: f64,
}

/// `trend-predictions` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendPredictions {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub color_predictions: Vec<ColorPrediction>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub top_combinations: Vec<Combination>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub insights: Vec<Insight>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub overall_metrics: OverallMetrics,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub confidence_score: f64,
}

impl TrendPredictions {
    /// Model confidence as a whole percentage, e.g. `"78%"`
    pub fn confidence_label(&self) -> String {
        format!("{:.0}%", self.confidence_score * 100.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub confidence: f64,
}

impl Recommendation {
    pub fn confidence_label(&self) -> String {
        format!("{:.0}%", self.confidence * 100.0)
    }
}

/// `recommendations` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_labels_round() {
        let predictions = TrendPredictions {
            confidence_score: 0.78,
            ..Default::default()
        };
        assert_eq!(predictions.confidence_label(), "78%");

        let rec = Recommendation {
            confidence: 0.85,
            ..Default::default()
        };
        assert_eq!(rec.confidence_label(), "85%");
    }

    #[test]
    fn test_null_scores_default() {
        let value = serde_json::json!({
            "success": true,
            "color_predictions": [{"color": "Navy", "predicted_score": null}],
            "overall_metrics": {"predicted_engagement": null},
            "confidence_score": null
        });
        let body = crate::models::Payload::<TrendPredictions>::from_value(&value)
            .ready()
            .unwrap();
        assert_eq!(body.color_predictions[0].predicted_score, 0.0);
        assert_eq!(body.overall_metrics.predicted_engagement, 0.0);
        assert_eq!(body.confidence_label(), "0%");
    }
}
