//! Per-dashboard reactive state, shared through Leptos context
//!
//! Created once by [`crate::App`]. Every field is a signal or stored value, so
//! the struct is `Copy` and can move into event handlers freely.

use crate::api::GlooFetcher;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use trendboard_core::{
    fetch_gallery, load_batch, render_tab, Activation, ChartRegistry, ChartSpec, GalleryState,
    ItemRef, Payload, Tab, TabController, TabState, TabView, VisibilityModel,
};

/// Rendered views, one slot per tab
#[derive(Clone, Copy)]
pub struct TabSlots {
    trends: RwSignal<Option<TabView>>,
    predictive: RwSignal<Option<TabView>>,
    items: RwSignal<Option<TabView>>,
    breakdown: RwSignal<Option<TabView>>,
}

impl TabSlots {
    fn new() -> Self {
        Self {
            trends: RwSignal::new(None),
            predictive: RwSignal::new(None),
            items: RwSignal::new(None),
            breakdown: RwSignal::new(None),
        }
    }

    pub fn slot(&self, tab: Tab) -> RwSignal<Option<TabView>> {
        match tab {
            Tab::Trends => self.trends,
            Tab::Predictive => self.predictive,
            Tab::Items => self.items,
            Tab::Breakdown => self.breakdown,
        }
    }
}

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub tabs: RwSignal<TabController>,
    pub views: TabSlots,
    /// Visibility models of interactive charts, by chart key
    pub charts: StoredValue<ChartRegistry<RwSignal<VisibilityModel>>>,
    pub gallery: RwSignal<GalleryState>,
    /// Banner text of the last failed batch
    pub error: RwSignal<Option<String>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            tabs: RwSignal::new(TabController::default()),
            views: TabSlots::new(),
            charts: StoredValue::new(ChartRegistry::new()),
            gallery: RwSignal::new(GalleryState::Closed),
            error: RwSignal::new(None),
        }
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.tabs.with(|t| t.is_active(tab))
    }

    /// The active tab's batch is in flight
    pub fn is_loading(&self) -> bool {
        self.tabs.with(|t| {
            t.active()
                .map(|tab| t.state(tab) == TabState::Loading)
                .unwrap_or(false)
        })
    }

    /// Show `tab`; loads its batch unless it is loaded or loading already
    pub fn activate(&self, tab: Tab) {
        let activation = self
            .tabs
            .try_update(|t| t.activate(tab))
            .unwrap_or(Activation::AlreadyLoaded);

        if activation != Activation::StartLoad {
            return;
        }

        self.error.set(None);
        let state = *self;
        spawn_local(async move {
            log!("Loading tab '{}'", tab);
            match load_batch(&GlooFetcher, &tab.endpoints()).await {
                Ok(batch) => {
                    let view = render_tab(tab, &batch);
                    log!("Tab '{}' ready with {} charts", tab, view.charts.len());
                    state.views.slot(tab).set(Some(view));
                    state.tabs.update(|t| t.finish_load(tab, true));
                }
                Err(e) => {
                    error!("Failed to load tab '{}': {}", tab, e);
                    state.error.set(Some(e.banner_message()));
                    state.tabs.update(|t| t.finish_load(tab, false));
                }
            }
        });
    }

    /// Visibility model for an interactive chart, created on first use
    ///
    /// Re-rendering a chart hands back the model already on screen, so a
    /// legend toggled before a redraw keeps its state.
    pub fn visibility(&self, spec: &ChartSpec) -> RwSignal<VisibilityModel> {
        let created = self.charts.try_update_value(|registry| {
            *registry.get_or_insert_with(&spec.key, || {
                RwSignal::new(VisibilityModel::for_chart(spec))
            })
        });

        match created {
            Some(model) => {
                if model.with_untracked(|m| m.len()) != spec.datasets.len() {
                    model.update(|m| m.sync_with(spec));
                }
                model
            }
            None => RwSignal::new(VisibilityModel::for_chart(spec)),
        }
    }

    /// Open the gallery modal for `item` and fetch its images
    pub fn open_gallery(&self, item: ItemRef) {
        self.gallery.update(|g| g.open(item.clone()));
        let gallery = self.gallery;

        spawn_local(async move {
            let outcome = match fetch_gallery(&GlooFetcher, &item).await {
                Ok(Payload::Ready(body)) => Ok(body),
                Ok(Payload::Failed { message }) => {
                    Err(message.unwrap_or_else(|| "No images available".to_string()))
                }
                Ok(Payload::Malformed { message }) => {
                    warn!("Unreadable gallery reply for {}: {}", item.heading(), message);
                    Err("Unexpected reply from the server".to_string())
                }
                Err(e) => {
                    error!("Gallery request failed: {}", e);
                    Err(e.to_string())
                }
            };
            gallery.update(|g| {
                g.resolve(&item, outcome);
            });
        });
    }

    pub fn close_gallery(&self) {
        self.gallery.update(|g| g.close());
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the dashboard state
pub fn use_dashboard() -> DashboardState {
    expect_context::<DashboardState>()
}
