//! Config resolution and terminal formatters for the CLI commands

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use std::path::{Path, PathBuf};
use trendboard_core::format::{format_compact, format_value, percentages};
use trendboard_core::models::ItemGallery;
use trendboard_core::{ChartKind, ChartSpec, DashboardConfig, ItemRef, Tab, TabView};

// ============================================================================
// Config
// ============================================================================

/// Command-line values that win over the config file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub backend: Option<String>,
    pub port: Option<u16>,
    pub dist: Option<PathBuf>,
    pub tab: Option<Tab>,
}

impl Overrides {
    pub fn apply(self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(backend) = self.backend {
            config.backend_url = backend;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dist) = self.dist {
            config.dist_dir = dist;
        }
        if let Some(tab) = self.tab {
            config.default_tab = tab;
        }
        config
    }
}

/// Load the config file (explicit path or platform default) and apply overrides
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<DashboardConfig> {
    let config = match path {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match DashboardConfig::default_path() {
            Some(path) => DashboardConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DashboardConfig::default(),
        },
    };
    Ok(overrides.apply(config))
}

// ============================================================================
// Formatters
// ============================================================================

fn new_table(headers: &[&str], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// One chart as a table: shares for doughnuts, colours for colour bars,
/// latest and peak per series for timelines
pub fn format_chart(chart: &ChartSpec, no_color: bool) -> String {
    if chart.is_empty() {
        return "No data.".to_string();
    }

    match chart.kind {
        ChartKind::Doughnut => {
            let mut table = new_table(&["Label", chart.value_label.as_str(), "Share"], no_color);
            if let Some(dataset) = chart.datasets.first() {
                let shares = percentages(&dataset.values);
                for ((label, value), share) in chart.labels.iter().zip(&dataset.values).zip(shares) {
                    table.add_row(Row::from(vec![
                        label.clone(),
                        format_value(*value),
                        format!("{:.1}%", share),
                    ]));
                }
            }
            table.to_string()
        }
        ChartKind::Bar { .. } => {
            let Some(dataset) = chart.datasets.first() else {
                return "No data.".to_string();
            };
            let with_colors = dataset.point_colors.is_some();
            let mut headers = vec!["Label", chart.value_label.as_str()];
            if with_colors {
                headers.push("Colour");
            }
            let mut table = new_table(&headers, no_color);
            for (i, (label, value)) in chart.labels.iter().zip(&dataset.values).enumerate() {
                let mut row = vec![label.clone(), format_value(*value)];
                if with_colors {
                    row.push(dataset.point_color(i).to_string());
                }
                table.add_row(Row::from(row));
            }
            table.to_string()
        }
        ChartKind::Line => {
            let mut table = new_table(&["Series", "Points", "Latest", "Peak"], no_color);
            for dataset in &chart.datasets {
                let latest = dataset
                    .values
                    .iter()
                    .rev()
                    .find(|v| v.is_finite())
                    .map(|v| format_value(*v))
                    .unwrap_or_else(|| "-".to_string());
                let peak = dataset
                    .values
                    .iter()
                    .copied()
                    .filter(|v| v.is_finite())
                    .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))))
                    .map(format_value)
                    .unwrap_or_else(|| "-".to_string());
                table.add_row(Row::from(vec![
                    dataset.label.clone(),
                    dataset.values.iter().filter(|v| v.is_finite()).count().to_string(),
                    latest,
                    peak,
                ]));
            }
            let span = match (chart.labels.first(), chart.labels.last()) {
                (Some(first), Some(last)) => format!("{} .. {}\n", first, last),
                _ => String::new(),
            };
            format!("{}{}", span, table)
        }
    }
}

/// Whole tab: summary cards, notices, every chart, then predictions
pub fn format_tab_view(view: &TabView, no_color: bool) -> String {
    let mut sections = vec![format!("== {} ==", view.tab.title())];

    if let Some(summary) = &view.summary {
        let mut table = new_table(&["Metric", "Value"], no_color);
        for (_, label, value) in summary.cards() {
            table.add_row(Row::from(vec![label.to_string(), value]));
        }
        sections.push(table.to_string());
    }

    sections.extend(view.notices.iter().cloned());

    for chart in &view.charts {
        let title = chart.title.as_deref().unwrap_or(chart.key.as_str());
        sections.push(format!("-- {} --\n{}", title, format_chart(chart, no_color)));
    }

    if let Some(panel) = &view.predictions {
        let mut lines = vec![
            "-- Predictions --".to_string(),
            format!("Confidence:            {}", panel.confidence),
            format!(
                "Predicted engagement:  {}",
                format_value(panel.predicted_engagement)
            ),
        ];
        for insight in &panel.insights {
            lines.push(format!("  • {}: {}", insight.title, insight.description));
        }
        sections.push(lines.join("\n"));
    }

    if !view.recommendations.is_empty() {
        let mut table = new_table(&["Recommendation", "Confidence", "Details"], no_color);
        for rec in &view.recommendations {
            table.add_row(Row::from(vec![
                rec.title.clone(),
                rec.confidence_label(),
                rec.description.clone(),
            ]));
        }
        sections.push(format!("-- Recommendations --\n{}", table));
    }

    if view.charts.is_empty() && view.summary.is_none() && view.predictions.is_none() {
        sections.push("No data returned for this tab.".to_string());
    }

    sections.join("\n\n")
}

/// Gallery listing; URLs are relative to the dev server
pub fn format_gallery(item: &ItemRef, gallery: &ItemGallery, no_color: bool) -> String {
    if gallery.images.is_empty() {
        return format!("No images found for {}.", item.heading());
    }

    let mut table = new_table(&["User", "Likes", "Comments", "Posted", "Image"], no_color);
    for image in &gallery.images {
        table.add_row(Row::from(vec![
            image.handle(),
            format_compact(image.likes_count.max(0) as u64),
            format_compact(image.comments_count.max(0) as u64),
            format_timestamp(&image.timestamp),
            image.image_url(),
        ]));
    }

    format!(
        "{} ({} images)\n{}",
        item.heading(),
        gallery.images.len(),
        table
    )
}

/// RFC 3339 timestamps as `YYYY-MM-DD HH:MM`; anything else verbatim
fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
