//! Tab pages
//!
//! Every tab stays mounted once rendered; switching tabs only toggles the
//! panel's `active` class.

mod breakdown;
mod items;
mod predictive;
mod trends;

pub use breakdown::BreakdownPage;
pub use items::ItemsPage;
pub use predictive::PredictivePage;
pub use trends::TrendsPage;

use crate::components::ChartCard;
use crate::state::use_dashboard;
use leptos::prelude::*;
use trendboard_core::{Tab, TabView};

/// Panel wrapper; renders `content` once the tab's view arrives
#[component]
pub fn TabPanel<F, V>(tab: Tab, content: F) -> impl IntoView
where
    F: Fn(TabView) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let state = use_dashboard();
    let slot = state.views.slot(tab);

    view! {
        <section
            class="tab-content"
            id=format!("{}-tab", tab.id())
            class:active=move || state.is_active(tab)
        >
            {move || slot.get().map(|v| content(v))}
        </section>
    }
}

/// Charts in render order
pub(crate) fn chart_grid(charts: Vec<trendboard_core::ChartSpec>) -> impl IntoView {
    view! {
        <div class="charts-grid">
            {charts
                .into_iter()
                .map(|spec| view! { <ChartCard spec /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

pub(crate) fn notices(notices: Vec<String>) -> impl IntoView {
    notices
        .into_iter()
        .map(|n| view! { <p class="notice">{n}</p> })
        .collect::<Vec<_>>()
}
