//! Hover tooltip shown under a chart

use leptos::prelude::*;
use trendboard_core::chart::TooltipText;

/// Renders whatever the chart last put into `tip`
#[component]
pub fn TooltipBox(tip: RwSignal<Option<TooltipText>>) -> impl IntoView {
    view! {
        <div class="chart-tooltip" class:visible=move || tip.with(|t| t.is_some())>
            {move || {
                tip.get()
                    .map(|t| {
                        view! {
                            <div class="chart-tooltip-title">{t.title}</div>
                            {t
                                .lines
                                .into_iter()
                                .map(|line| view! { <div class="chart-tooltip-line">{line}</div> })
                                .collect::<Vec<_>>()}
                        }
                    })
            }}
        </div>
    }
}
