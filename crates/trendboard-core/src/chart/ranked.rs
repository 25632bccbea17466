//! Ranked lists drawn as single-color horizontal bars

use super::{ChartKind, ChartSpec, Dataset, Tooltip};
use crate::endpoint::ItemGroup;
use crate::models::{Combination, ColorPrediction, NamedCount, SubcategoriesStats, TrendChange};
use crate::palette::{self, color_for, palette_color};

/// Horizontal bars in one color
pub fn ranked_bar(
    key: &str,
    value_label: &str,
    labels: Vec<String>,
    values: Vec<f64>,
    color: &str,
) -> ChartSpec {
    let mut spec = ChartSpec::new(key, ChartKind::Bar { horizontal: true });
    spec.labels = labels;
    spec.value_label = value_label.to_string();
    spec.datasets = vec![Dataset::new(key, value_label, values, color)];
    spec
}

/// Top subcategories; tooltip title names the parent category
pub fn subcategories(key: &str, stats: &SubcategoriesStats) -> ChartSpec {
    let items = &stats.subcategories;
    let mut spec = ranked_bar(
        key,
        "Count",
        items.iter().map(|s| s.name.clone()).collect(),
        items.iter().map(|s| s.count as f64).collect(),
        palette_color(0),
    );
    spec.tooltip = Tooltip::Ranked {
        titles: Some(
            items
                .iter()
                .map(|s| format!("{} ({})", s.name, s.category))
                .collect(),
        ),
    };
    spec
}

/// Growth-rate bars for emerging or declining trends
pub fn growth(key: &str, trends: &[TrendChange], color: &str) -> ChartSpec {
    let mut spec = ranked_bar(
        key,
        "Growth (%)",
        trends.iter().map(|t| t.name.clone()).collect(),
        trends.iter().map(|t| t.growth_rate).collect(),
        color,
    );
    spec.x_title = Some("Growth (%)".to_string());
    spec.tooltip = Tooltip::Ranked {
        titles: Some(trends.iter().map(TrendChange::title).collect()),
    };
    spec
}

/// Top items of one group; clicking a bar opens its gallery
pub fn top_items(key: &str, group: ItemGroup, items: &[NamedCount]) -> ChartSpec {
    let mut spec = ranked_bar(
        key,
        "Count",
        items.iter().map(|i| i.name.clone()).collect(),
        items.iter().map(|i| i.count as f64).collect(),
        palette_color(0),
    );
    spec.drilldown = Some(group.category().to_string());
    spec
}

/// Predicted engagement per color, drawn in the color itself
pub fn color_predictions(key: &str, predictions: &[ColorPrediction]) -> ChartSpec {
    let mut spec = ranked_bar(
        key,
        "Predicted engagement",
        predictions.iter().map(|p| p.color.clone()).collect(),
        predictions.iter().map(|p| p.predicted_score).collect(),
        palette::PRIMARY,
    );
    let colors = predictions
        .iter()
        .enumerate()
        .map(|(i, p)| color_for(&p.color, i).to_string())
        .collect();
    if let Some(ds) = spec.datasets.first_mut() {
        ds.point_colors = Some(colors);
    }
    spec.tooltip = Tooltip::Ranked {
        titles: Some(
            predictions
                .iter()
                .map(|p| format!("{} ({} posts)", p.color, p.sample_size))
                .collect(),
        ),
    };
    spec
}

/// Engagement score of category + color combinations
pub fn combinations(key: &str, combos: &[Combination]) -> ChartSpec {
    let mut spec = ranked_bar(
        key,
        "Engagement",
        combos.iter().map(|c| c.name.clone()).collect(),
        combos.iter().map(|c| c.engagement_score).collect(),
        palette::SECONDARY,
    );
    spec.tooltip = Tooltip::Ranked {
        titles: Some(
            combos
                .iter()
                .map(|c| format!("{} ({} posts)", c.name, c.sample_size))
                .collect(),
        ),
    };
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::keys;
    use crate::models::SubcategoryCount;

    #[test]
    fn test_subcategory_tooltip_title() {
        let stats = SubcategoriesStats {
            subcategories: vec![SubcategoryCount {
                name: "Sneakers".to_string(),
                category: "Footwear".to_string(),
                count: 1_204,
            }],
        };
        let spec = subcategories(keys::SUBCATEGORIES, &stats);
        let tip = spec.tooltip(0, 0).unwrap();
        assert_eq!(tip.title, "Sneakers (Footwear)");
        assert_eq!(tip.lines, vec!["Count: 1,204"]);
    }

    #[test]
    fn test_growth_chart_values() {
        let trends = vec![TrendChange {
            name: "Loafers".to_string(),
            category: "Footwear".to_string(),
            growth_rate: 87.5,
            current_count: 15,
        }];
        let spec = growth(keys::EMERGING_TOP10, &trends, palette::SUCCESS);
        assert_eq!(spec.datasets[0].values, vec![87.5]);
        assert_eq!(spec.datasets[0].color, palette::SUCCESS);
        assert_eq!(spec.tooltip(0, 0).unwrap().lines, vec!["Growth (%): 87.5"]);
    }

    #[test]
    fn test_top_items_drilldown() {
        let items = vec![NamedCount::new("Bag (Black)", 9), NamedCount::new("Belt", 4)];
        let spec = top_items(
            &keys::top_items(ItemGroup::Accessories),
            ItemGroup::Accessories,
            &items,
        );
        assert_eq!(spec.key, "topAccessoriesChart");
        let item = spec.item_at(1).unwrap();
        assert_eq!(item.item_name, "Belt");
        assert_eq!(item.top_category, "Accessories");
    }

    #[test]
    fn test_color_predictions_colors() {
        let predictions = vec![
            ColorPrediction {
                color: "Pink".to_string(),
                predicted_score: 310.2,
                sample_size: 40,
            },
            ColorPrediction {
                color: "Sage".to_string(),
                predicted_score: 120.0,
                sample_size: 8,
            },
        ];
        let spec = color_predictions(keys::COLOR_PREDICTIONS, &predictions);
        assert_eq!(spec.datasets[0].point_color(0), "#FFC0CB");
        assert_eq!(spec.datasets[0].point_color(1), palette_color(1));
        assert_eq!(spec.tooltip(0, 1).unwrap().title, "Sage (8 posts)");
    }
}
