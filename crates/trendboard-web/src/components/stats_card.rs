//! Stats card component for the trends summary

use leptos::prelude::*;
use trendboard_core::TrendSummary;

/// StatsCard component - displays a single metric with icon and label
#[component]
pub fn StatsCard(
    /// DOM id of the value element (e.g., "totalCategories")
    id: &'static str,
    label: &'static str,
    value: String,
    /// Icon emoji (e.g., "📊")
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stats-card">
            <div class="stats-card-icon">{icon}</div>
            <div class="stats-card-content">
                <div class="stats-card-label">{label}</div>
                <div class="stats-card-value" id=id>{value}</div>
            </div>
        </div>
    }
}

/// Row of the four headline numbers
#[component]
pub fn SummaryCards(summary: TrendSummary) -> impl IntoView {
    let icons = ["🖼️", "🗂️", "🎨", "🧵"];
    view! {
        <div class="stats-grid">
            {summary
                .cards()
                .into_iter()
                .zip(icons)
                .map(|((id, label, value), icon)| view! { <StatsCard id label value icon /> })
                .collect::<Vec<_>>()}
        </div>
    }
}
