//! One chart with its title and legend

use super::{BarChart, DoughnutChart, InteractiveLegend, LineChart, StaticLegend};
use crate::state::use_dashboard;
use leptos::prelude::*;
use trendboard_core::{ChartKind, ChartSpec, LegendMode};

/// Picks the chart component for `spec.kind` and wires legend and drilldown
#[component]
pub fn ChartCard(spec: ChartSpec) -> impl IntoView {
    let state = use_dashboard();
    let id = spec.key.clone();
    let title = spec.title.clone().unwrap_or_default();

    let body = match spec.kind {
        ChartKind::Doughnut => {
            let entries: Vec<(String, String)> = spec
                .share_labels()
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    let color = spec
                        .datasets
                        .first()
                        .map(|d| d.point_color(i).to_string())
                        .unwrap_or_default();
                    (label, color)
                })
                .collect();
            view! {
                <DoughnutChart spec />
                <StaticLegend entries />
            }
            .into_any()
        }
        ChartKind::Bar { .. } => {
            let on_select = spec.drilldown.is_some().then(|| {
                let drill = spec.clone();
                Callback::new(move |index: usize| {
                    if let Some(item) = drill.item_at(index) {
                        state.open_gallery(item);
                    }
                })
            });
            match on_select {
                Some(on_select) => view! { <BarChart spec on_select /> }.into_any(),
                None => view! { <BarChart spec /> }.into_any(),
            }
        }
        ChartKind::Line => match spec.legend {
            LegendMode::Interactive => {
                let model = state.visibility(&spec);
                let legend_spec = spec.clone();
                view! {
                    <LineChart spec visibility=model />
                    <InteractiveLegend spec=legend_spec model />
                }
                .into_any()
            }
            LegendMode::Static => {
                let entries: Vec<(String, String)> = spec
                    .datasets
                    .iter()
                    .map(|d| (d.label.clone(), d.color.clone()))
                    .collect();
                view! {
                    <LineChart spec />
                    <StaticLegend entries />
                }
                .into_any()
            }
            LegendMode::Hidden => view! { <LineChart spec /> }.into_any(),
        },
    };

    view! {
        <div class="card chart-card">
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
            </div>
            <div class="card-body chart-container" id=id>
                {body}
            </div>
        </div>
    }
}
