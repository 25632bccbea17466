//! Main Leptos App component

use leptos::prelude::*;
use trendboard_core::Tab;

use crate::components::{AnalyticsLoader, ErrorBanner, GalleryModal, TabBar};
use crate::pages::{BreakdownPage, ItemsPage, PredictivePage, TrendsPage};
use crate::state::DashboardState;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let state = DashboardState::new();
    provide_context(state);

    // First activation happens client-side only
    Effect::new(move |_| state.activate(initial_tab()));

    view! {
        <div class="app">
            <header class="header">
                <h1 class="header-title">"Fashion Trend Analytics"</h1>
            </header>
            <main class="content" id="analyticsContentWrapper">
                <TabBar />
                <ErrorBanner />
                <AnalyticsLoader />
                <TrendsPage />
                <PredictivePage />
                <ItemsPage />
                <BreakdownPage />
            </main>
            <GalleryModal />
        </div>
    }
}

/// `?tab=` from the page URL, else the trends tab
fn initial_tab() -> Tab {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| tab_from_query(&search))
        .unwrap_or(Tab::Trends)
}

fn tab_from_query(search: &str) -> Option<Tab> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "tab")
        .and_then(|(_, value)| value.trim().parse().ok())
}
