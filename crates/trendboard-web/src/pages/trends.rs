//! Trends tab: distributions and the category timeline

use super::{chart_grid, TabPanel};
use crate::components::SummaryCards;
use leptos::prelude::*;
use trendboard_core::{Tab, TabView};

#[component]
pub fn TrendsPage() -> impl IntoView {
    view! { <TabPanel tab=Tab::Trends content=render /> }
}

fn render(data: TabView) -> impl IntoView {
    let summary = data.summary.map(|summary| view! { <SummaryCards summary /> });
    view! {
        {summary}
        {chart_grid(data.charts)}
    }
}
