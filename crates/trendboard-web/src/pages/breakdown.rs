//! Per-category breakdown of colors, materials and styles

use super::{chart_grid, TabPanel};
use leptos::prelude::*;
use trendboard_core::{Tab, TabView};

#[component]
pub fn BreakdownPage() -> impl IntoView {
    view! { <TabPanel tab=Tab::Breakdown content=render /> }
}

fn render(data: TabView) -> impl IntoView {
    if data.charts.is_empty() {
        return view! { <div class="empty-state">"No category breakdown available"</div> }
            .into_any();
    }
    chart_grid(data.charts).into_any()
}
