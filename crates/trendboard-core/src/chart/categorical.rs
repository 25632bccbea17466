//! One value per named category: doughnuts and color bars

use super::{ChartKind, ChartSpec, Dataset, LegendMode, Tooltip};
use crate::models::NamedCount;
use crate::palette::{self, color_for, palette_color};

/// Doughnut with palette-cycled slices and share tooltips
pub fn doughnut(key: &str, items: &[NamedCount]) -> ChartSpec {
    let mut spec = ChartSpec::new(key, ChartKind::Doughnut);
    spec.labels = items.iter().map(|i| i.name.clone()).collect();
    spec.legend = LegendMode::Static;
    spec.tooltip = Tooltip::Share;

    let colors = (0..items.len())
        .map(|i| palette_color(i).to_string())
        .collect();
    spec.datasets = vec![Dataset::new(key, key, counts(items), palette::BORDER)
        .with_point_colors(colors)];
    spec
}

/// Horizontal bars drawn in the color each bar names
pub fn color_bars(key: &str, items: &[NamedCount]) -> ChartSpec {
    let mut spec = ChartSpec::new(key, ChartKind::Bar { horizontal: true });
    spec.labels = items.iter().map(|i| i.name.clone()).collect();

    let colors = items
        .iter()
        .enumerate()
        .map(|(i, item)| color_for(&item.name, i).to_string())
        .collect();
    spec.datasets = vec![Dataset::new(key, "Count", counts(items), palette::PRIMARY)
        .with_point_colors(colors)];
    spec
}

fn counts(items: &[NamedCount]) -> Vec<f64> {
    items.iter().map(|i| i.count as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::keys;
    use crate::palette::PALETTE;

    fn items(pairs: &[(&str, u64)]) -> Vec<NamedCount> {
        pairs.iter().map(|(n, c)| NamedCount::new(*n, *c)).collect()
    }

    #[test]
    fn test_doughnut_share_labels() {
        let spec = doughnut(keys::CATEGORIES, &items(&[("A", 30), ("B", 70)]));
        assert_eq!(spec.share_labels(), vec!["A: 30 (30.0%)", "B: 70 (70.0%)"]);
        assert_eq!(spec.tooltip(0, 1).unwrap().lines, vec!["B: 70 (70.0%)"]);
    }

    #[test]
    fn test_doughnut_slices_cycle_palette() {
        let many: Vec<NamedCount> = (0..14)
            .map(|i| NamedCount::new(format!("c{}", i), 1))
            .collect();
        let spec = doughnut(keys::STYLES, &many);
        let ds = &spec.datasets[0];
        assert_eq!(ds.point_color(0), PALETTE[0]);
        assert_eq!(ds.point_color(12), PALETTE[0]);
        assert_eq!(ds.point_color(13), PALETTE[1]);
    }

    #[test]
    fn test_color_bars_use_real_colors() {
        let spec = color_bars(
            keys::COLORS,
            &items(&[("Black", 50), ("Mauve", 20), ("Beige", 10)]),
        );
        let ds = &spec.datasets[0];
        assert_eq!(ds.point_color(0), "#000000");
        assert_eq!(ds.point_color(1), PALETTE[1]);
        assert_eq!(ds.point_color(2), "#F5F5DC");
        assert_eq!(spec.kind, ChartKind::Bar { horizontal: true });
    }

    #[test]
    fn test_empty_items() {
        let spec = doughnut(keys::MATERIALS, &[]);
        assert!(spec.is_empty());
        assert!(spec.share_labels().is_empty());
    }
}
