//! Analytics endpoint catalogue

use crate::models::ItemRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path prefix shared by every analytics endpoint
pub const API_PREFIX: &str = "/api/analytics";

/// Top-level category groups with their own "top items" endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemGroup {
    Accessories,
    Clothing,
    Footwear,
}

impl ItemGroup {
    pub const ALL: [ItemGroup; 3] = [ItemGroup::Accessories, ItemGroup::Clothing, ItemGroup::Footwear];

    /// Lowercase form used in endpoint paths
    pub fn slug(&self) -> &'static str {
        match self {
            ItemGroup::Accessories => "accessories",
            ItemGroup::Clothing => "clothing",
            ItemGroup::Footwear => "footwear",
        }
    }

    /// Category name as tagged by the backend (`top_category`)
    pub fn category(&self) -> &'static str {
        match self {
            ItemGroup::Accessories => "Accessories",
            ItemGroup::Clothing => "Clothing",
            ItemGroup::Footwear => "Footwear",
        }
    }
}

/// One analytics endpoint that takes no parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CategoriesStats,
    SubcategoriesStats,
    ColorsStats,
    MaterialsStats,
    StylesStats,
    TrendsTimeline,
    EmergingTrends,
    EmergingTrendsDynamics,
    ColorDynamics,
    MaterialDynamics,
    TopItemsStats(ItemGroup),
    TopItemsDynamics(ItemGroup),
    TrendPredictions,
    Recommendations,
    ColorsByCategory,
    MaterialsByCategory,
    StylesByCategory,
}

impl Endpoint {
    /// Last path segment, e.g. `categories-stats`
    pub fn slug(&self) -> String {
        match self {
            Endpoint::CategoriesStats => "categories-stats".to_string(),
            Endpoint::SubcategoriesStats => "subcategories-stats".to_string(),
            Endpoint::ColorsStats => "colors-stats".to_string(),
            Endpoint::MaterialsStats => "materials-stats".to_string(),
            Endpoint::StylesStats => "styles-stats".to_string(),
            Endpoint::TrendsTimeline => "trends-timeline".to_string(),
            Endpoint::EmergingTrends => "emerging-trends".to_string(),
            Endpoint::EmergingTrendsDynamics => "emerging-trends-dynamics".to_string(),
            Endpoint::ColorDynamics => "color-dynamics".to_string(),
            Endpoint::MaterialDynamics => "material-dynamics".to_string(),
            Endpoint::TopItemsStats(group) => format!("top-{}-stats", group.slug()),
            Endpoint::TopItemsDynamics(group) => format!("top-{}-dynamics", group.slug()),
            Endpoint::TrendPredictions => "trend-predictions".to_string(),
            Endpoint::Recommendations => "recommendations".to_string(),
            Endpoint::ColorsByCategory => "colors-by-category".to_string(),
            Endpoint::MaterialsByCategory => "materials-by-category".to_string(),
            Endpoint::StylesByCategory => "styles-by-category".to_string(),
        }
    }

    /// Absolute request path
    pub fn path(&self) -> String {
        format!("{}/{}", API_PREFIX, self.slug())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

/// `item-gallery` request path with URL-encoded query
pub fn item_gallery_path(item: &ItemRef) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("item_name", &item.item_name)
        .append_pair("top_category", &item.top_category)
        .finish();
    format!("{}/item-gallery?{}", API_PREFIX, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        assert_eq!(
            Endpoint::CategoriesStats.path(),
            "/api/analytics/categories-stats"
        );
        assert_eq!(
            Endpoint::EmergingTrendsDynamics.path(),
            "/api/analytics/emerging-trends-dynamics"
        );
    }

    #[test]
    fn test_grouped_paths() {
        assert_eq!(
            Endpoint::TopItemsStats(ItemGroup::Footwear).path(),
            "/api/analytics/top-footwear-stats"
        );
        assert_eq!(
            Endpoint::TopItemsDynamics(ItemGroup::Accessories).to_string(),
            "top-accessories-dynamics"
        );
    }

    #[test]
    fn test_item_gallery_path_encodes_query() {
        let item = ItemRef::new("Bag (Black)", "Accessories");
        assert_eq!(
            item_gallery_path(&item),
            "/api/analytics/item-gallery?item_name=Bag+%28Black%29&top_category=Accessories"
        );
    }

    #[test]
    fn test_item_group_category_names() {
        let names: Vec<_> = ItemGroup::ALL.iter().map(|g| g.category()).collect();
        assert_eq!(names, vec!["Accessories", "Clothing", "Footwear"]);
    }
}
