//! Predictive tab: emerging trends, dynamics, predictions, recommendations

use super::{chart_grid, notices, TabPanel};
use crate::components::{PredictionSummary, RecommendationList};
use leptos::prelude::*;
use trendboard_core::{Tab, TabView};

#[component]
pub fn PredictivePage() -> impl IntoView {
    view! { <TabPanel tab=Tab::Predictive content=render /> }
}

fn render(data: TabView) -> impl IntoView {
    let panel = data
        .predictions
        .map(|panel| view! { <PredictionSummary panel /> });
    let recommendations = data.recommendations;

    view! {
        {notices(data.notices)}
        {chart_grid(data.charts)}
        {panel}
        <h3 class="section-title">"Recommendations"</h3>
        <RecommendationList recommendations />
    }
}
