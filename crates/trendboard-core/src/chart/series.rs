//! Multi-series monthly line charts

use super::{ChartKind, ChartSpec, Dataset, LegendMode, Tooltip};
use crate::models::{Dynamics, Timeline};
use crate::palette::{palette_color, ColorStrategy};

/// Category mentions per month, filled areas, static legend
pub fn timeline(key: &str, timeline: &Timeline) -> ChartSpec {
    let mut spec = ChartSpec::new(key, ChartKind::Line);
    spec.labels = timeline.months.clone();
    spec.legend = LegendMode::Static;
    spec.tooltip = Tooltip::Monthly { mentions: false };
    spec.datasets = timeline
        .series
        .iter()
        .enumerate()
        .map(|(index, (category, counts))| {
            Dataset::new(
                category.clone(),
                category.clone(),
                points(counts),
                palette_color(index),
            )
            .with_fill()
        })
        .collect();
    spec
}

/// Tracked entities per month with an interactive legend
///
/// `mentions` selects the `"Name: N mentions"` tooltip body used by the
/// color and material charts; otherwise the body repeats the legend label.
pub fn dynamics(
    key: &str,
    dynamics: &Dynamics,
    colors: ColorStrategy,
    mentions: bool,
) -> ChartSpec {
    let mut spec = ChartSpec::new(key, ChartKind::Line);
    spec.labels = dynamics.months.clone();
    spec.legend = LegendMode::Interactive;
    spec.tooltip = Tooltip::Monthly { mentions };
    spec.value_label = "Mentions".to_string();
    spec.x_title = Some("Month".to_string());
    spec.y_title = Some("Mentions".to_string());
    spec.datasets = dynamics
        .series
        .iter()
        .enumerate()
        .map(|(index, series)| {
            Dataset::new(
                series_key(&series.name, index),
                series.label(),
                points(&series.data),
                colors.pick(&series.name, index),
            )
            .with_name(series.name.clone())
            .with_note(series.category.clone())
        })
        .collect();
    spec
}

/// Missing months become NaN, which the line renderer draws as a gap
fn points(counts: &[Option<u64>]) -> Vec<f64> {
    counts
        .iter()
        .map(|c| c.map_or(f64::NAN, |c| c as f64))
        .collect()
}

// Names can repeat across categories ("Boots" in two groups); suffix the
// index so visibility keys stay unique.
fn series_key(name: &str, index: usize) -> String {
    format!("{}#{}", name, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::keys;
    use crate::models::DynamicsSeries;
    use crate::palette::PALETTE;
    use std::collections::BTreeMap;

    fn color_dynamics() -> Dynamics {
        Dynamics {
            months: vec!["2024-01".into(), "2024-02".into(), "2024-03".into()],
            series: vec![
                DynamicsSeries {
                    name: "Navy".into(),
                    data: vec![Some(1), Some(4), Some(9)],
                    growth_rate: Some(800.0),
                    ..Default::default()
                },
                DynamicsSeries {
                    name: "Lilac".into(),
                    data: vec![Some(2), Some(2), Some(5)],
                    growth_rate: Some(150.0),
                    ..Default::default()
                },
            ],
            message: None,
        }
    }

    #[test]
    fn test_timeline_palette_and_fill() {
        let mut series = BTreeMap::new();
        series.insert("Accessories".to_string(), vec![Some(1), Some(2)]);
        series.insert("Clothing".to_string(), vec![Some(5), Some(6)]);
        let spec = timeline(
            keys::TIMELINE,
            &Timeline {
                months: vec!["2024-01".into(), "2024-02".into()],
                series,
            },
        );
        assert_eq!(spec.datasets.len(), 2);
        assert_eq!(spec.datasets[0].color, PALETTE[0]);
        assert_eq!(spec.datasets[1].color, PALETTE[1]);
        assert!(spec.datasets.iter().all(|d| d.fill_area));
        assert_eq!(spec.legend, LegendMode::Static);
    }

    #[test]
    fn test_color_dynamics_named_colors() {
        let spec = dynamics(
            keys::COLOR_DYNAMICS,
            &color_dynamics(),
            ColorStrategy::NamedColors,
            true,
        );
        assert_eq!(spec.datasets[0].color, "#000080");
        assert_eq!(spec.datasets[1].color, PALETTE[1]);
        assert_eq!(spec.datasets[0].label, "Navy (+800%)");
        assert_eq!(spec.legend, LegendMode::Interactive);
        assert_eq!(
            spec.tooltip(0, 2).unwrap().lines,
            vec!["Navy: 9 mentions"]
        );
    }

    #[test]
    fn test_trend_dynamics_note_line() {
        let data = Dynamics {
            months: vec!["2024-05".into()],
            series: vec![DynamicsSeries {
                name: "Cargo pants".into(),
                category: Some("Clothing".into()),
                data: vec![Some(12)],
                growth_rate: Some(40.0),
                total_count: None,
            }],
            message: None,
        };
        let spec = dynamics(keys::EMERGING_DYNAMICS, &data, ColorStrategy::Palette, false);
        let tip = spec.tooltip(0, 0).unwrap();
        assert_eq!(tip.title, "Month: 2024-05");
        assert_eq!(tip.lines, vec!["Cargo pants (+40%): 12", "Clothing"]);
    }

    #[test]
    fn test_duplicate_names_get_unique_keys() {
        let data = Dynamics {
            months: vec!["2024-01".into()],
            series: vec![
                DynamicsSeries {
                    name: "Boots".into(),
                    data: vec![Some(1)],
                    ..Default::default()
                },
                DynamicsSeries {
                    name: "Boots".into(),
                    data: vec![Some(2)],
                    ..Default::default()
                },
            ],
            message: None,
        };
        let spec = dynamics("x", &data, ColorStrategy::Palette, false);
        assert_ne!(spec.datasets[0].key, spec.datasets[1].key);
    }

    #[test]
    fn test_missing_month_is_a_gap() {
        let data = Dynamics {
            months: vec!["2024-01".into(), "2024-02".into(), "2024-03".into()],
            series: vec![DynamicsSeries {
                name: "Olive".into(),
                data: vec![Some(3), None, Some(7)],
                ..Default::default()
            }],
            message: None,
        };
        let spec = dynamics("x", &data, ColorStrategy::Palette, true);
        let values = &spec.datasets[0].values;
        assert_eq!(values[0], 3.0);
        assert!(values[1].is_nan());
        assert_eq!(spec.max_value(|_| true), 7.0);
        assert!(spec.tooltip(0, 1).is_none());
        assert_eq!(spec.tooltip(0, 2).unwrap().lines, vec!["Olive: 7 mentions"]);
    }
}
