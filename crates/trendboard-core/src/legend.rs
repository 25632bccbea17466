//! Series visibility and the interactive legend
//!
//! A chart and its legend never hold visibility state of their own. Both are
//! drawn from one [`VisibilityModel`], so a hidden series and an unchecked
//! legend entry cannot drift apart.

use crate::chart::ChartSpec;
use serde::Serialize;

/// Opacity of a legend entry whose series is hidden
pub const HIDDEN_OPACITY: f64 = 0.3;

/// Ordered series key -> visible
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityModel {
    entries: Vec<(String, bool)>,
}

impl VisibilityModel {
    /// Every dataset of `spec`, all visible
    pub fn for_chart(spec: &ChartSpec) -> Self {
        Self::from_keys(spec.datasets.iter().map(|d| d.key.clone()))
    }

    pub fn from_keys(keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: keys.into_iter().map(|k| (k, true)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unknown keys count as visible
    pub fn is_visible(&self, key: &str) -> bool {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, visible)| *visible)
            .unwrap_or(true)
    }

    /// Flip one series; returns its new state, `None` for unknown keys
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|(k, _)| k == key)?;
        entry.1 = !entry.1;
        Some(entry.1)
    }

    pub fn hide_all(&mut self) {
        for entry in &mut self.entries {
            entry.1 = false;
        }
    }

    pub fn show_all(&mut self) {
        for entry in &mut self.entries {
            entry.1 = true;
        }
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| *v).count()
    }

    /// Add keys present in `spec` but not yet tracked, keeping existing state
    pub fn sync_with(&mut self, spec: &ChartSpec) {
        for dataset in &spec.datasets {
            if !self.entries.iter().any(|(k, _)| *k == dataset.key) {
                self.entries.push((dataset.key.clone(), true));
            }
        }
    }
}

/// One legend row as the DOM shows it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
    pub color: String,
    pub visible: bool,
}

impl LegendEntry {
    pub fn opacity(&self) -> f64 {
        if self.visible {
            1.0
        } else {
            HIDDEN_OPACITY
        }
    }

    pub fn checkmark(&self) -> &'static str {
        if self.visible {
            "✓"
        } else {
            ""
        }
    }
}

/// Legend rows for `spec` under `model`
pub fn legend_entries(spec: &ChartSpec, model: &VisibilityModel) -> Vec<LegendEntry> {
    spec.datasets
        .iter()
        .map(|d| LegendEntry {
            key: d.key.clone(),
            label: d.label.clone(),
            color: d.color.clone(),
            visible: model.is_visible(&d.key),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartKind, Dataset};

    fn spec(keys: &[&str]) -> ChartSpec {
        let mut spec = ChartSpec::new("dyn", ChartKind::Line);
        spec.labels = vec!["2024-01".to_string()];
        spec.datasets = keys
            .iter()
            .map(|k| Dataset::new(*k, *k, vec![1.0], "#667eea"))
            .collect();
        spec
    }

    #[test]
    fn test_toggle_affects_only_one_series() {
        let spec = spec(&["a", "b", "c"]);
        let mut model = VisibilityModel::for_chart(&spec);

        assert_eq!(model.toggle("b"), Some(false));
        assert!(model.is_visible("a"));
        assert!(!model.is_visible("b"));
        assert!(model.is_visible("c"));
        assert_eq!(model.toggle("missing"), None);
    }

    #[test]
    fn test_hide_all_then_show_all_restores_state() {
        let spec = spec(&["a", "b", "c", "d"]);
        let mut model = VisibilityModel::for_chart(&spec);
        let before_model = model.clone();
        let before_entries = legend_entries(&spec, &model);

        model.hide_all();
        assert_eq!(model.visible_count(), 0);
        for entry in legend_entries(&spec, &model) {
            assert!(!entry.visible);
            assert_eq!(entry.checkmark(), "");
            assert_eq!(entry.opacity(), HIDDEN_OPACITY);
        }

        model.show_all();
        assert_eq!(model, before_model);
        assert_eq!(legend_entries(&spec, &model), before_entries);
    }

    #[test]
    fn test_legend_mirrors_chart_visibility() {
        let spec = spec(&["a", "b"]);
        let mut model = VisibilityModel::for_chart(&spec);
        model.toggle("a");

        let entries = legend_entries(&spec, &model);
        for entry in &entries {
            assert_eq!(entry.visible, model.is_visible(&entry.key));
        }
        assert_eq!(entries[0].opacity(), HIDDEN_OPACITY);
        assert_eq!(entries[1].checkmark(), "✓");
        // hidden series no longer drive the y-scale
        assert_eq!(spec.max_value(|k| model.is_visible(k)), 1.0);
    }

    #[test]
    fn test_sync_keeps_existing_state() {
        let mut model = VisibilityModel::for_chart(&spec(&["a"]));
        model.toggle("a");
        model.sync_with(&spec(&["a", "b"]));
        assert_eq!(model.len(), 2);
        assert!(!model.is_visible("a"));
        assert!(model.is_visible("b"));
    }
}
