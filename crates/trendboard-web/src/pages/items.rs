//! Top items tab; clicking a bar opens the item gallery

use super::{chart_grid, TabPanel};
use leptos::prelude::*;
use trendboard_core::{Tab, TabView};

#[component]
pub fn ItemsPage() -> impl IntoView {
    view! { <TabPanel tab=Tab::Items content=render /> }
}

fn render(data: TabView) -> impl IntoView {
    view! {
        <p class="hint">"Click a bar to see matching photos."</p>
        {chart_grid(data.charts)}
    }
}
