//! Ranked and categorical count payloads

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `{name, count}` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedCount {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count: u64,
}

impl NamedCount {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// `{name, category, count}` record from `subcategories-stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryCount {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesStats {
    pub categories: Vec<NamedCount>,
}

impl CategoriesStats {
    /// Total tagged objects across all categories
    pub fn total(&self) -> u64 {
        self.categories.iter().map(|c| c.count).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoriesStats {
    pub subcategories: Vec<SubcategoryCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorsStats {
    pub colors: Vec<NamedCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialsStats {
    pub materials: Vec<NamedCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylesStats {
    pub styles: Vec<NamedCount>,
}

/// `top-{group}-stats`: items named `"Subcategory (Color)"` or `"Subcategory"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopItemsStats {
    pub items: Vec<NamedCount>,
}

/// `{colors,materials,styles}-by-category`: top values per top-level category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub data: BTreeMap<String, Vec<NamedCount>>,
}
