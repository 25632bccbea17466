//! Chart specifications
//!
//! Renderers are pure functions from payload records to a [`ChartSpec`].
//! The web crate draws a spec as SVG; the CLI prints it as a table. Neither
//! needs to know which endpoint the data came from.

pub mod categorical;
pub mod ranked;
pub mod series;

use crate::format::{format_value, percentage};
use crate::models::ItemRef;
use serde::Serialize;

/// Chart keys double as DOM ids of the chart containers
pub mod keys {
    use crate::endpoint::ItemGroup;

    pub const CATEGORIES: &str = "categoriesChart";
    pub const SUBCATEGORIES: &str = "subcategoriesChart";
    pub const COLORS: &str = "colorsChart";
    pub const MATERIALS: &str = "materialsChart";
    pub const STYLES: &str = "stylesChart";
    pub const TIMELINE: &str = "timelineChart";
    pub const EMERGING_TOP10: &str = "emergingTrendsTop10Chart";
    pub const DECLINING: &str = "decliningTrendsChart";
    pub const EMERGING_DYNAMICS: &str = "emergingTrendsDynamicsChart";
    pub const COLOR_DYNAMICS: &str = "colorDynamicsChart";
    pub const MATERIAL_DYNAMICS: &str = "materialDynamicsChart";
    pub const COLOR_PREDICTIONS: &str = "colorPredictionsChart";
    pub const COMBINATIONS: &str = "topCombinationsChart";

    /// e.g. `topAccessoriesChart`
    pub fn top_items(group: ItemGroup) -> String {
        format!("top{}Chart", group.category())
    }

    /// e.g. `topFootwearDynamicsChart`
    pub fn top_items_dynamics(group: ItemGroup) -> String {
        format!("top{}DynamicsChart", group.category())
    }

    /// e.g. `colorsByCategory-Clothing`
    pub fn breakdown(prefix: &str, category: &str) -> String {
        format!("{}ByCategory-{}", prefix, category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Doughnut,
    Bar { horizontal: bool },
    Line,
}

/// Which legend a chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegendMode {
    Hidden,
    /// Static swatches under the chart
    Static,
    /// Clickable entries with hide-all / show-all, backed by a visibility model
    Interactive,
}

/// Tooltip text layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Tooltip {
    /// `"Label: 1,234 (12.3%)"`
    Share,
    /// Optional per-point title, body `"{value_label}: value"`
    Ranked { titles: Option<Vec<String>> },
    /// Title `"Month: 2024-03"`, body per dataset
    Monthly { mentions: bool },
}

/// Rendered tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipText {
    pub title: String,
    pub lines: Vec<String>,
}

impl TooltipText {
    /// Single string for SVG `<title>` elements
    pub fn to_plain(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(line);
        }
        out
    }
}

/// One series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Stable id used by the visibility model
    pub key: String,
    /// Raw entity name
    pub name: String,
    /// Legend text
    pub label: String,
    pub values: Vec<f64>,
    /// Line / bar color
    pub color: String,
    /// Per-point colors (doughnut slices, color bars)
    pub point_colors: Option<Vec<String>>,
    /// Fill the area under a line
    pub fill_area: bool,
    /// Extra tooltip line, e.g. the trend's category
    pub note: Option<String>,
}

impl Dataset {
    pub fn new(key: impl Into<String>, label: impl Into<String>, values: Vec<f64>, color: &str) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            label: label.into(),
            values,
            color: color.to_string(),
            point_colors: None,
            fill_area: false,
            note: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_point_colors(mut self, colors: Vec<String>) -> Self {
        self.point_colors = Some(colors);
        self
    }

    pub fn with_fill(mut self) -> Self {
        self.fill_area = true;
        self
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    pub fn total(&self) -> f64 {
        self.values.iter().filter(|v| v.is_finite()).sum()
    }

    /// Color of one point, falling back to the series color
    pub fn point_color(&self, index: usize) -> &str {
        self.point_colors
            .as_ref()
            .and_then(|colors| colors.get(index))
            .map(String::as_str)
            .unwrap_or(self.color.as_str())
    }
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub key: String,
    /// Heading above the chart
    pub title: Option<String>,
    pub kind: ChartKind,
    /// Category labels or month labels (x axis)
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub legend: LegendMode,
    pub tooltip: Tooltip,
    /// Name of the plotted quantity, e.g. `"Count"`
    pub value_label: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    /// Bar click opens the gallery for `(label, category)`
    pub drilldown: Option<String>,
}

impl ChartSpec {
    pub fn new(key: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            key: key.into(),
            title: None,
            kind,
            labels: Vec::new(),
            datasets: Vec::new(),
            legend: LegendMode::Hidden,
            tooltip: Tooltip::Ranked { titles: None },
            value_label: "Count".to_string(),
            x_title: None,
            y_title: None,
            drilldown: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.iter().all(|d| d.values.is_empty())
    }

    /// Slice labels of the first dataset: `"A: 30 (30.0%)"`
    pub fn share_labels(&self) -> Vec<String> {
        let Some(dataset) = self.datasets.first() else {
            return Vec::new();
        };
        let total = dataset.total();
        self.labels
            .iter()
            .zip(&dataset.values)
            .map(|(label, value)| share_label(label, *value, total))
            .collect()
    }

    /// Largest value among datasets accepted by `visible`
    pub fn max_value(&self, visible: impl Fn(&str) -> bool) -> f64 {
        self.datasets
            .iter()
            .filter(|d| visible(&d.key))
            .flat_map(|d| d.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    /// Gallery scope for a clicked bar
    pub fn item_at(&self, index: usize) -> Option<ItemRef> {
        let category = self.drilldown.as_ref()?;
        let label = self.labels.get(index)?;
        Some(ItemRef::new(label.clone(), category.clone()))
    }

    /// Tooltip for one point of one dataset
    pub fn tooltip(&self, dataset: usize, point: usize) -> Option<TooltipText> {
        let ds = self.datasets.get(dataset)?;
        let value = *ds.values.get(point)?;
        // gap in a monthly series
        if !value.is_finite() {
            return None;
        }
        let label = self.labels.get(point).cloned().unwrap_or_default();

        let text = match &self.tooltip {
            Tooltip::Share => TooltipText {
                title: String::new(),
                lines: vec![share_label(&label, value, ds.total())],
            },
            Tooltip::Ranked { titles } => TooltipText {
                title: titles
                    .as_ref()
                    .and_then(|t| t.get(point).cloned())
                    .unwrap_or(label),
                lines: vec![format!("{}: {}", self.value_label, format_value(value))],
            },
            Tooltip::Monthly { mentions } => {
                let body = if *mentions {
                    format!("{}: {} mentions", ds.name, format_value(value))
                } else {
                    format!("{}: {}", ds.label, format_value(value))
                };
                let mut lines = vec![body];
                if let Some(note) = &ds.note {
                    lines.push(note.clone());
                }
                TooltipText {
                    title: format!("Month: {}", label),
                    lines,
                }
            }
        };
        Some(text)
    }
}

/// `"{label}: {value} ({pct}%)"`
pub fn share_label(label: &str, value: f64, total: f64) -> String {
    format!(
        "{}: {} ({:.1}%)",
        label,
        format_value(value),
        percentage(value, total)
    )
}
