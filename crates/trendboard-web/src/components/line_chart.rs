//! Multi-series monthly line chart
//!
//! Redraws whenever its visibility model changes; hidden series are left out
//! and no longer count towards the y-axis maximum.

use super::geometry::{area_path, label_step, line_path, spread, LinearScale};
use super::tooltip::TooltipBox;
use leptos::prelude::*;
use trendboard_core::format::format_value;
use trendboard_core::palette::with_alpha;
use trendboard_core::{ChartSpec, VisibilityModel};

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const Y_TICKS: usize = 4;
const MAX_X_LABELS: usize = 12;
const FILL_ALPHA: u8 = 0x33;

#[component]
pub fn LineChart(
    spec: ChartSpec,
    /// Series visibility; `None` draws every series
    #[prop(optional)]
    visibility: Option<RwSignal<VisibilityModel>>,
) -> impl IntoView {
    if spec.is_empty() {
        return view! { <div class="chart-empty">"No data available"</div> }.into_any();
    }
    let tip = RwSignal::new(None);
    let spec = StoredValue::new(spec);

    let plot = move || {
        let visible = move |key: &str| {
            visibility
                .map(|v| v.with(|m| m.is_visible(key)))
                .unwrap_or(true)
        };
        spec.with_value(|spec| {
            let months = spec.labels.len();
            let x = |i: usize| spread(i, months, MARGIN_LEFT, CHART_WIDTH - MARGIN_RIGHT);
            let y_scale = LinearScale::from_values(
                0.0,
                spec.max_value(visible),
                (CHART_HEIGHT - MARGIN_BOTTOM, MARGIN_TOP),
            );
            let baseline = y_scale.map(0.0);

            let y_ticks: Vec<_> = y_scale
                .ticks(Y_TICKS)
                .into_iter()
                .map(|value| {
                    let y = y_scale.map(value);
                    view! {
                        <line
                            x1=MARGIN_LEFT.to_string()
                            y1=y.to_string()
                            x2=(CHART_WIDTH - MARGIN_RIGHT).to_string()
                            y2=y.to_string()
                            stroke="var(--border-color)"
                            stroke-width="1"
                            stroke-dasharray="2,4"
                        />
                        <text
                            x=(MARGIN_LEFT - 8.0).to_string()
                            y=(y + 4.0).to_string()
                            text-anchor="end"
                            fill="var(--text-secondary)"
                            font-size="12"
                        >
                            {format_value(value.round())}
                        </text>
                    }
                })
                .collect();

            let step = label_step(months, MAX_X_LABELS);
            let x_labels: Vec<_> = spec
                .labels
                .iter()
                .enumerate()
                .filter(|(i, _)| i % step == 0)
                .map(|(i, month)| {
                    view! {
                        <text
                            x=x(i).to_string()
                            y=(CHART_HEIGHT - MARGIN_BOTTOM + 20.0).to_string()
                            text-anchor="middle"
                            fill="var(--text-secondary)"
                            font-size="12"
                        >
                            {month.clone()}
                        </text>
                    }
                })
                .collect();

            let series: Vec<_> = spec
                .datasets
                .iter()
                .enumerate()
                .filter(|(_, ds)| visible(&ds.key))
                .map(|(index, ds)| {
                    let points: Vec<Option<(f64, f64)>> = ds
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| v.is_finite().then(|| (x(i), y_scale.map(*v))))
                        .collect();
                    let area = ds
                        .fill_area
                        .then(|| area_path(&points, baseline))
                        .unwrap_or_default();
                    let markers: Vec<_> = points
                        .iter()
                        .enumerate()
                        .filter_map(|(point, p)| p.map(|p| (point, p)))
                        .map(|(point, (px, py))| {
                            let text = spec.tooltip(index, point);
                            view! {
                                <circle
                                    cx=px.to_string()
                                    cy=py.to_string()
                                    r="4"
                                    fill=ds.color.clone()
                                    on:mouseenter=move |_| tip.set(text.clone())
                                    on:mouseleave=move |_| tip.set(None)
                                />
                            }
                        })
                        .collect();

                    view! {
                        <g class="line-series" data-series=ds.key.clone()>
                            <path d=area fill=with_alpha(&ds.color, FILL_ALPHA) stroke="none" />
                            <path
                                d=line_path(&points)
                                fill="none"
                                stroke=ds.color.clone()
                                stroke-width="2"
                            />
                            {markers}
                        </g>
                    }
                })
                .collect();

            view! {
                {y_ticks}
                <line
                    x1=MARGIN_LEFT.to_string()
                    y1=baseline.to_string()
                    x2=(CHART_WIDTH - MARGIN_RIGHT).to_string()
                    y2=baseline.to_string()
                    stroke="var(--border-color)"
                    stroke-width="2"
                />
                {x_labels}
                {series}
            }
        })
    };

    let x_title = spec.with_value(|s| s.x_title.clone()).unwrap_or_default();
    let y_title = spec.with_value(|s| s.y_title.clone()).unwrap_or_default();

    view! {
        <svg
            class="chart-svg line-chart"
            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            style="width: 100%; height: auto;"
        >
            {plot}
            <text
                x=((MARGIN_LEFT + CHART_WIDTH - MARGIN_RIGHT) / 2.0).to_string()
                y=(CHART_HEIGHT - 8.0).to_string()
                text-anchor="middle"
                fill="var(--text-secondary)"
                font-size="12"
            >
                {x_title}
            </text>
            <text
                x="14"
                y=(CHART_HEIGHT / 2.0).to_string()
                text-anchor="middle"
                fill="var(--text-secondary)"
                font-size="12"
                transform=format!("rotate(-90 14 {})", CHART_HEIGHT / 2.0)
            >
                {y_title}
            </text>
        </svg>
        <TooltipBox tip />
    }
    .into_any()
}
