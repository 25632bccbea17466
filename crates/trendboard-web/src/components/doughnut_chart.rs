//! Doughnut chart with share tooltips

use super::geometry::{ring_segment, slices};
use super::tooltip::TooltipBox;
use leptos::prelude::*;
use trendboard_core::ChartSpec;

const SIZE: f64 = 220.0;
const OUTER_RADIUS: f64 = 100.0;
const INNER_RADIUS: f64 = 60.0;

#[component]
pub fn DoughnutChart(spec: ChartSpec) -> impl IntoView {
    let Some(dataset) = spec.datasets.first().cloned() else {
        return view! { <div class="chart-empty">"No data available"</div> }.into_any();
    };
    let tip = RwSignal::new(None);

    let center = SIZE / 2.0;
    let segments: Vec<_> = slices(&dataset.values)
        .into_iter()
        .enumerate()
        .filter(|(_, (start, end))| end > start)
        .map(|(i, (start, end))| {
            let d = ring_segment(center, center, OUTER_RADIUS, INNER_RADIUS, start, end);
            let color = dataset.point_color(i).to_string();
            let text = spec.tooltip(0, i);
            view! {
                <path
                    d=d
                    fill=color
                    stroke=dataset.color.clone()
                    stroke-width="2"
                    on:mouseenter=move |_| tip.set(text.clone())
                    on:mouseleave=move |_| tip.set(None)
                />
            }
        })
        .collect();

    view! {
        <svg
            class="chart-svg doughnut-chart"
            viewBox=format!("0 0 {} {}", SIZE, SIZE)
            style="width: 100%; max-width: 320px; height: auto;"
        >
            {segments}
        </svg>
        <TooltipBox tip />
    }
    .into_any()
}
