//! Headline numbers shown above the trends charts

use crate::format::format_count;
use crate::models::{CategoriesStats, ColorsStats, MaterialsStats, Payload};
use serde::Serialize;

/// Each field stays `None` when its source payload failed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendSummary {
    /// Sum of all category counts
    pub total_images: Option<u64>,
    pub total_categories: Option<usize>,
    pub total_colors: Option<usize>,
    pub total_materials: Option<usize>,
}

impl TrendSummary {
    pub fn from_payloads(
        categories: &Payload<CategoriesStats>,
        colors: &Payload<ColorsStats>,
        materials: &Payload<MaterialsStats>,
    ) -> Self {
        let categories = categories.as_ready();
        Self {
            total_images: categories.map(CategoriesStats::total),
            total_categories: categories.map(|c| c.categories.len()),
            total_colors: colors.as_ready().map(|c| c.colors.len()),
            total_materials: materials.as_ready().map(|m| m.materials.len()),
        }
    }

    /// `(dom id, label, text)` per stat card; missing values read `"-"`
    pub fn cards(&self) -> Vec<(&'static str, &'static str, String)> {
        vec![
            (
                "totalImages",
                "Images analysed",
                self.total_images.map(format_count).unwrap_or_else(dash),
            ),
            (
                "totalCategories",
                "Categories",
                self.total_categories.map(|n| n.to_string()).unwrap_or_else(dash),
            ),
            (
                "totalColors",
                "Colors",
                self.total_colors.map(|n| n.to_string()).unwrap_or_else(dash),
            ),
            (
                "totalMaterials",
                "Materials",
                self.total_materials.map(|n| n.to_string()).unwrap_or_else(dash),
            ),
        ]
    }
}

fn dash() -> String {
    "-".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedCount;

    #[test]
    fn test_summary_counts() {
        let categories = Payload::Ready(CategoriesStats {
            categories: vec![NamedCount::new("A", 1_200), NamedCount::new("B", 300)],
        });
        let colors = Payload::Ready(ColorsStats {
            colors: vec![NamedCount::new("Red", 5)],
        });
        let materials = Payload::Failed { message: None };

        let summary = TrendSummary::from_payloads(&categories, &colors, &materials);
        assert_eq!(summary.total_images, Some(1_500));
        assert_eq!(summary.total_categories, Some(2));
        assert_eq!(summary.total_materials, None);

        let cards = summary.cards();
        assert_eq!(cards[0].2, "1,500");
        assert_eq!(cards[1], ("totalCategories", "Categories", "2".to_string()));
        assert_eq!(cards[3].2, "-");
    }
}
