//! Chart legends
//!
//! [`InteractiveLegend`] and the line chart both read the same
//! `RwSignal<VisibilityModel>`, so an entry's checkmark and its series'
//! visibility always agree.

use leptos::prelude::*;
use trendboard_core::{legend_entries, ChartSpec, VisibilityModel};

/// Clickable legend with hide-all / show-all controls
#[component]
pub fn InteractiveLegend(spec: ChartSpec, model: RwSignal<VisibilityModel>) -> impl IntoView {
    let legend_id = format!("{}-legend", spec.key);
    let spec = StoredValue::new(spec);

    view! {
        <div class="legend-controls">
            <button class="btn btn-secondary btn-sm" on:click=move |_| model.update(|m| m.hide_all())>
                "Hide all"
            </button>
            <button class="btn btn-secondary btn-sm" on:click=move |_| model.update(|m| m.show_all())>
                "Show all"
            </button>
        </div>
        <div class="interactive-legend" id=legend_id>
            {move || {
                let entries = spec.with_value(|s| model.with(|m| legend_entries(s, m)));
                entries
                    .into_iter()
                    .map(|entry| {
                        let key = entry.key.clone();
                        view! {
                            <button
                                class="legend-item"
                                class:legend-item-hidden=!entry.visible
                                style=format!("opacity: {}", entry.opacity())
                                on:click=move |_| {
                                    model.update(|m| {
                                        m.toggle(&key);
                                    })
                                }
                            >
                                <span class="legend-swatch" style=format!("background: {}", entry.color)>
                                    {entry.checkmark()}
                                </span>
                                <span class="legend-label">{entry.label.clone()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Non-interactive swatches
#[component]
pub fn StaticLegend(entries: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div class="static-legend">
            {entries
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <span class="legend-item">
                            <span class="legend-swatch" style=format!("background: {}", color)></span>
                            <span class="legend-label">{label}</span>
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
