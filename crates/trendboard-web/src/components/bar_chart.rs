//! Bar chart (horizontal ranked lists, or columns)

use super::geometry::LinearScale;
use super::tooltip::TooltipBox;
use leptos::prelude::*;
use trendboard_core::format::format_value;
use trendboard_core::{ChartKind, ChartSpec};

const CHART_WIDTH: f64 = 640.0;
const ROW_HEIGHT: f64 = 26.0;
const BAR_GAP: f64 = 6.0;
const COLUMN_HEIGHT: f64 = 280.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 170.0;
const MARGIN_RIGHT: f64 = 60.0;
const LABEL_MAX_CHARS: usize = 24;

/// Bar chart; `on_select` receives the clicked bar index
#[component]
pub fn BarChart(
    spec: ChartSpec,
    #[prop(optional)] on_select: Option<Callback<usize>>,
) -> impl IntoView {
    let Some(dataset) = spec.datasets.first().cloned() else {
        return view! { <div class="chart-empty">"No data available"</div> }.into_any();
    };
    let horizontal = !matches!(spec.kind, ChartKind::Bar { horizontal: false });
    let tip = RwSignal::new(None);
    let clickable = on_select.is_some();

    let min = dataset.values.iter().copied().fold(0.0, f64::min);
    let max = dataset.values.iter().copied().fold(0.0, f64::max);
    let n = spec.labels.len().max(1) as f64;

    let (width, height) = if horizontal {
        (CHART_WIDTH, MARGIN_TOP + MARGIN_BOTTOM + n * ROW_HEIGHT)
    } else {
        (CHART_WIDTH, COLUMN_HEIGHT)
    };
    let scale = if horizontal {
        LinearScale::from_values(min, max, (MARGIN_LEFT, width - MARGIN_RIGHT))
    } else {
        LinearScale::from_values(min, max, (height - MARGIN_BOTTOM, MARGIN_TOP))
    };
    let zero = scale.map(0.0);
    let band = if horizontal {
        ROW_HEIGHT
    } else {
        (width - MARGIN_LEFT - MARGIN_RIGHT) / n
    };

    let bars: Vec<_> = spec
        .labels
        .iter()
        .zip(&dataset.values)
        .enumerate()
        .map(|(i, (label, value))| {
            let end = scale.map(*value);
            let offset = i as f64 * band + BAR_GAP / 2.0;
            let (x, y, w, h) = if horizontal {
                (end.min(zero), MARGIN_TOP + offset, (end - zero).abs(), band - BAR_GAP)
            } else {
                (MARGIN_LEFT + offset, end.min(zero), band - BAR_GAP, (end - zero).abs())
            };
            let (label_x, label_y, anchor) = if horizontal {
                (MARGIN_LEFT - 8.0, y + h / 2.0 + 4.0, "end")
            } else {
                (x + w / 2.0, height - MARGIN_BOTTOM + 16.0, "middle")
            };
            let value_x = if horizontal { x + w + 6.0 } else { x + w / 2.0 };
            let value_y = if horizontal { label_y } else { y - 4.0 };
            let value_anchor = if horizontal { "start" } else { "middle" };

            let color = dataset.point_color(i).to_string();
            let text = spec.tooltip(0, i);
            let value_text = format_value(*value);
            let short = truncate(label);
            let on_select = on_select.clone();

            view! {
                <g
                    class="bar"
                    class:bar-clickable=clickable
                    on:mouseenter=move |_| tip.set(text.clone())
                    on:mouseleave=move |_| tip.set(None)
                    on:click=move |_| {
                        if let Some(cb) = on_select.as_ref() {
                            cb.run(i);
                        }
                    }
                >
                    <rect
                        x=format!("{:.2}", x)
                        y=format!("{:.2}", y)
                        width=format!("{:.2}", w)
                        height=format!("{:.2}", h)
                        fill=color
                        rx="3"
                    />
                    <text
                        x=format!("{:.2}", label_x)
                        y=format!("{:.2}", label_y)
                        text-anchor=anchor
                        fill="var(--text-secondary)"
                        font-size="12"
                    >
                        {short}
                    </text>
                    <text
                        x=format!("{:.2}", value_x)
                        y=format!("{:.2}", value_y)
                        text-anchor=value_anchor
                        fill="var(--text-primary)"
                        font-size="11"
                    >
                        {value_text}
                    </text>
                </g>
            }
        })
        .collect();

    let (zx1, zy1, zx2, zy2) = if horizontal {
        (zero, MARGIN_TOP, zero, height - MARGIN_BOTTOM)
    } else {
        (MARGIN_LEFT, zero, width - MARGIN_RIGHT, zero)
    };
    let axis_title = spec.x_title.clone().unwrap_or_default();

    view! {
        <svg
            class="chart-svg bar-chart"
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: auto;"
        >
            <line
                x1=zx1.to_string()
                y1=zy1.to_string()
                x2=zx2.to_string()
                y2=zy2.to_string()
                stroke="var(--border-color)"
                stroke-width="1"
            />
            {bars}
            <text
                x=((MARGIN_LEFT + width - MARGIN_RIGHT) / 2.0).to_string()
                y=(height - 8.0).to_string()
                text-anchor="middle"
                fill="var(--text-secondary)"
                font-size="12"
            >
                {axis_title}
            </text>
        </svg>
        <TooltipBox tip />
    }
    .into_any()
}

fn truncate(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_labels() {
        assert_eq!(truncate("Bag (Black)"), "Bag (Black)");
        let long = "Oversized wool-blend double-breasted coat (Camel)";
        let short = truncate(long);
        assert_eq!(short.chars().count(), LABEL_MAX_CHARS);
        assert!(short.ends_with('…'));
    }
}
