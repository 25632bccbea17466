//! Tab controller
//!
//! Owns per-tab load state for one dashboard view. A tab loads on its first
//! activation; activating it again only switches visibility. A failed load
//! leaves the tab in [`TabState::Failed`] so the next activation retries.

use crate::endpoint::{Endpoint, ItemGroup};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Trends,
    Predictive,
    Items,
    Breakdown,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Trends, Tab::Predictive, Tab::Items, Tab::Breakdown];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Trends => "trends",
            Tab::Predictive => "predictive",
            Tab::Items => "items",
            Tab::Breakdown => "breakdown",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Trends => "Trends",
            Tab::Predictive => "Predictive",
            Tab::Items => "Top Items",
            Tab::Breakdown => "By Category",
        }
    }

    /// Endpoints fetched together when the tab loads, in render order
    pub fn endpoints(&self) -> Vec<Endpoint> {
        match self {
            Tab::Trends => vec![
                Endpoint::CategoriesStats,
                Endpoint::SubcategoriesStats,
                Endpoint::ColorsStats,
                Endpoint::MaterialsStats,
                Endpoint::StylesStats,
                Endpoint::TrendsTimeline,
            ],
            Tab::Predictive => vec![
                Endpoint::EmergingTrends,
                Endpoint::EmergingTrendsDynamics,
                Endpoint::ColorDynamics,
                Endpoint::MaterialDynamics,
                Endpoint::TrendPredictions,
                Endpoint::Recommendations,
            ],
            Tab::Items => ItemGroup::ALL
                .iter()
                .flat_map(|g| [Endpoint::TopItemsStats(*g), Endpoint::TopItemsDynamics(*g)])
                .collect(),
            Tab::Breakdown => vec![
                Endpoint::ColorsByCategory,
                Endpoint::MaterialsByCategory,
                Endpoint::StylesByCategory,
            ],
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| format!("unknown tab '{}' (expected trends|predictive|items|breakdown)", s))
    }
}

/// Load state of one tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TabState {
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

/// What the caller must do after an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Start the tab's batch now
    StartLoad,
    /// Batch already running; just show the tab
    InFlight,
    /// Data on screen; pure visibility switch
    AlreadyLoaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    states: Vec<(Tab, TabState)>,
    active: Option<Tab>,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(&Tab::ALL)
    }
}

impl TabController {
    pub fn new(tabs: &[Tab]) -> Self {
        Self {
            states: tabs.iter().map(|t| (*t, TabState::Unloaded)).collect(),
            active: None,
        }
    }

    pub fn tabs(&self) -> impl Iterator<Item = Tab> + '_ {
        self.states.iter().map(|(t, _)| *t)
    }

    pub fn active(&self) -> Option<Tab> {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == Some(tab)
    }

    /// State of `tab`; tabs the controller does not manage read as `Unloaded`
    pub fn state(&self, tab: Tab) -> TabState {
        self.states
            .iter()
            .find(|(t, _)| *t == tab)
            .map(|(_, s)| *s)
            .unwrap_or(TabState::Unloaded)
    }

    /// Make `tab` the only active tab and decide whether it needs a load
    pub fn activate(&mut self, tab: Tab) -> Activation {
        self.active = Some(tab);

        let Some(entry) = self.states.iter_mut().find(|(t, _)| *t == tab) else {
            tracing::warn!("activate: tab '{}' is not managed by this controller", tab);
            return Activation::AlreadyLoaded;
        };

        match entry.1 {
            TabState::Unloaded | TabState::Failed => {
                entry.1 = TabState::Loading;
                tracing::debug!("tab '{}' activated, starting load", tab);
                Activation::StartLoad
            }
            TabState::Loading => Activation::InFlight,
            TabState::Loaded => Activation::AlreadyLoaded,
        }
    }

    /// Record the outcome of a batch started by [`Self::activate`]
    pub fn finish_load(&mut self, tab: Tab, success: bool) {
        if let Some(entry) = self.states.iter_mut().find(|(t, _)| *t == tab) {
            if entry.1 != TabState::Loading {
                tracing::warn!("finish_load: tab '{}' was {:?}, not loading", tab, entry.1);
            }
            entry.1 = if success {
                TabState::Loaded
            } else {
                TabState::Failed
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_activation_loads() {
        let mut tabs = TabController::default();
        assert_eq!(tabs.activate(Tab::Trends), Activation::StartLoad);
        assert_eq!(tabs.state(Tab::Trends), TabState::Loading);
        assert!(tabs.is_active(Tab::Trends));
    }

    #[test]
    fn test_loaded_tab_is_sticky() {
        let mut tabs = TabController::default();
        tabs.activate(Tab::Trends);
        tabs.finish_load(Tab::Trends, true);

        tabs.activate(Tab::Predictive);
        assert!(!tabs.is_active(Tab::Trends));
        assert_eq!(tabs.activate(Tab::Trends), Activation::AlreadyLoaded);
        assert_eq!(tabs.state(Tab::Trends), TabState::Loaded);
    }

    #[test]
    fn test_in_flight_tab_does_not_reload() {
        let mut tabs = TabController::default();
        tabs.activate(Tab::Items);
        tabs.activate(Tab::Trends);
        assert_eq!(tabs.activate(Tab::Items), Activation::InFlight);
    }

    #[test]
    fn test_failed_tab_retries() {
        let mut tabs = TabController::default();
        tabs.activate(Tab::Predictive);
        tabs.finish_load(Tab::Predictive, false);
        assert_eq!(tabs.state(Tab::Predictive), TabState::Failed);
        assert_eq!(tabs.activate(Tab::Predictive), Activation::StartLoad);
    }

    #[test]
    fn test_only_one_active() {
        let mut tabs = TabController::default();
        for tab in Tab::ALL {
            tabs.activate(tab);
            assert_eq!(tabs.tabs().filter(|t| tabs.is_active(*t)).count(), 1);
        }
    }

    #[test]
    fn test_tab_parse_and_endpoints() {
        assert_eq!("items".parse::<Tab>().unwrap(), Tab::Items);
        assert!("nope".parse::<Tab>().is_err());
        assert_eq!(Tab::Trends.endpoints().len(), 6);
        assert_eq!(Tab::Items.endpoints().len(), 6);
        assert_eq!(Tab::Items.endpoints()[1], Endpoint::TopItemsDynamics(ItemGroup::Accessories));
    }
}
