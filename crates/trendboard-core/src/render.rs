//! Per-tab renderers
//!
//! Turn a loaded [`Batch`] into everything one tab shows. Charts come out in
//! a fixed order per tab regardless of which request finished first. A
//! payload with `success: false` skips its chart; one that cannot be decoded
//! does the same and logs a warning.

use crate::chart::{categorical, keys, ranked, series, ChartSpec};
use crate::endpoint::{Endpoint, ItemGroup};
use crate::loader::Batch;
use crate::models::{
    CategoriesStats, CategoryBreakdown, ColorsStats, Dynamics, EmergingTrends, Insight,
    MaterialsStats, Payload, Recommendation, Recommendations, StylesStats, SubcategoriesStats,
    TimelinePayload, TopItemsStats, TrendPredictions,
};
use crate::palette::{self, ColorStrategy};
use crate::summary::TrendSummary;
use crate::tabs::Tab;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Number of emerging trends shown in the ranked growth chart
pub const EMERGING_TOP_N: usize = 10;

/// Model-level numbers shown beside the prediction charts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionPanel {
    pub confidence: String,
    pub predicted_engagement: f64,
    pub insights: Vec<Insight>,
}

/// Everything one tab displays after a successful batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub tab: Tab,
    pub charts: Vec<ChartSpec>,
    pub summary: Option<TrendSummary>,
    pub predictions: Option<PredictionPanel>,
    pub recommendations: Vec<Recommendation>,
    /// Backend notes such as the analysis period
    pub notices: Vec<String>,
}

impl TabView {
    fn new(tab: Tab) -> Self {
        Self {
            tab,
            charts: Vec::new(),
            summary: None,
            predictions: None,
            recommendations: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn chart(&self, key: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.key == key)
    }

    fn push(&mut self, chart: ChartSpec) {
        self.charts.push(chart);
    }
}

/// Build the view of `tab` from its batch
pub fn render_tab(tab: Tab, batch: &Batch) -> TabView {
    let view = match tab {
        Tab::Trends => render_trends(batch),
        Tab::Predictive => render_predictive(batch),
        Tab::Items => render_items(batch),
        Tab::Breakdown => render_breakdown(batch),
    };
    tracing::debug!("Rendered tab '{}': {} charts", tab, view.charts.len());
    view
}

fn render_trends(batch: &Batch) -> TabView {
    let mut view = TabView::new(Tab::Trends);

    let categories = typed::<CategoriesStats>(batch, Endpoint::CategoriesStats);
    let colors = typed::<ColorsStats>(batch, Endpoint::ColorsStats);
    let materials = typed::<MaterialsStats>(batch, Endpoint::MaterialsStats);
    view.summary = Some(TrendSummary::from_payloads(&categories, &colors, &materials));

    if let Some(c) = categories.as_ready() {
        view.push(categorical::doughnut(keys::CATEGORIES, &c.categories).with_title("Categories"));
    }
    if let Some(s) = ready::<SubcategoriesStats>(batch, Endpoint::SubcategoriesStats) {
        view.push(ranked::subcategories(keys::SUBCATEGORIES, &s).with_title("Top subcategories"));
    }
    if let Some(c) = colors.as_ready() {
        view.push(categorical::color_bars(keys::COLORS, &c.colors).with_title("Colors"));
    }
    if let Some(m) = materials.as_ready() {
        view.push(categorical::doughnut(keys::MATERIALS, &m.materials).with_title("Materials"));
    }
    if let Some(s) = ready::<StylesStats>(batch, Endpoint::StylesStats) {
        view.push(categorical::doughnut(keys::STYLES, &s.styles).with_title("Styles"));
    }
    if let Some(t) = ready::<TimelinePayload>(batch, Endpoint::TrendsTimeline) {
        view.push(series::timeline(keys::TIMELINE, &t.timeline).with_title("Category mentions by month"));
    }
    view
}

fn render_predictive(batch: &Batch) -> TabView {
    let mut view = TabView::new(Tab::Predictive);

    if let Some(trends) = ready::<EmergingTrends>(batch, Endpoint::EmergingTrends) {
        if let Some(period) = &trends.analysis_period {
            view.notices.push(format!("Analysis period: {}", period));
        }
        if let Some(message) = &trends.message {
            view.notices.push(message.clone());
        }
        let top: Vec<_> = trends.emerging.iter().take(EMERGING_TOP_N).cloned().collect();
        view.push(
            ranked::growth(keys::EMERGING_TOP10, &top, palette::SUCCESS)
                .with_title("Top 10 emerging trends"),
        );
        if !trends.declining.is_empty() {
            view.push(
                ranked::growth(keys::DECLINING, &trends.declining, palette::DANGER)
                    .with_title("Declining trends"),
            );
        }
    }

    let dynamics = [
        (
            Endpoint::EmergingTrendsDynamics,
            keys::EMERGING_DYNAMICS,
            ColorStrategy::Palette,
            false,
            "Emerging trends by month",
        ),
        (
            Endpoint::ColorDynamics,
            keys::COLOR_DYNAMICS,
            ColorStrategy::NamedColors,
            true,
            "Color dynamics",
        ),
        (
            Endpoint::MaterialDynamics,
            keys::MATERIAL_DYNAMICS,
            ColorStrategy::Palette,
            true,
            "Material dynamics",
        ),
    ];
    for (endpoint, key, colors, mentions, title) in dynamics {
        if let Some(d) = ready::<Dynamics>(batch, endpoint) {
            if let Some(message) = &d.message {
                view.notices.push(message.clone());
            }
            view.push(series::dynamics(key, &d, colors, mentions).with_title(title));
        }
    }

    if let Some(p) = ready::<TrendPredictions>(batch, Endpoint::TrendPredictions) {
        view.push(
            ranked::color_predictions(keys::COLOR_PREDICTIONS, &p.color_predictions)
                .with_title("Predicted color engagement"),
        );
        view.push(
            ranked::combinations(keys::COMBINATIONS, &p.top_combinations)
                .with_title("Top category + color combinations"),
        );
        view.predictions = Some(PredictionPanel {
            confidence: p.confidence_label(),
            predicted_engagement: p.overall_metrics.predicted_engagement,
            insights: p.insights,
        });
    }

    if let Some(r) = ready::<Recommendations>(batch, Endpoint::Recommendations) {
        view.recommendations = r.recommendations;
    }
    view
}

fn render_items(batch: &Batch) -> TabView {
    let mut view = TabView::new(Tab::Items);

    for group in ItemGroup::ALL {
        if let Some(stats) = ready::<TopItemsStats>(batch, Endpoint::TopItemsStats(group)) {
            view.push(
                ranked::top_items(&keys::top_items(group), group, &stats.items)
                    .with_title(format!("Top {}", group.category())),
            );
        }
        if let Some(d) = ready::<Dynamics>(batch, Endpoint::TopItemsDynamics(group)) {
            view.push(
                series::dynamics(&keys::top_items_dynamics(group), &d, ColorStrategy::Palette, false)
                    .with_title(format!("{} by month", group.category())),
            );
        }
    }
    view
}

fn render_breakdown(batch: &Batch) -> TabView {
    let mut view = TabView::new(Tab::Breakdown);

    let sources = [
        (Endpoint::ColorsByCategory, "colors", "Colors"),
        (Endpoint::MaterialsByCategory, "materials", "Materials"),
        (Endpoint::StylesByCategory, "styles", "Styles"),
    ];
    for (endpoint, prefix, noun) in sources {
        let Some(breakdown) = ready::<CategoryBreakdown>(batch, endpoint) else {
            continue;
        };
        for (category, items) in &breakdown.data {
            let key = keys::breakdown(prefix, category);
            let chart = if endpoint == Endpoint::ColorsByCategory {
                categorical::color_bars(&key, items)
            } else {
                ranked::ranked_bar(
                    &key,
                    "Count",
                    items.iter().map(|i| i.name.clone()).collect(),
                    items.iter().map(|i| i.count as f64).collect(),
                    palette::palette_color(0),
                )
            };
            view.push(chart.with_title(format!("{}: {}", noun, category)));
        }
    }
    view
}

fn typed<T: DeserializeOwned>(batch: &Batch, endpoint: Endpoint) -> Payload<T> {
    let payload = batch.payload::<T>(endpoint);
    match &payload {
        Payload::Ready(_) => {}
        Payload::Failed { message } => {
            tracing::debug!(
                "{} reported failure: {}",
                endpoint,
                message.as_deref().unwrap_or("no message")
            );
        }
        Payload::Malformed { message } => {
            tracing::warn!("{} returned an unreadable body, skipping chart: {}", endpoint, message);
        }
    }
    payload
}

fn ready<T: DeserializeOwned>(batch: &Batch, endpoint: Endpoint) -> Option<T> {
    typed(batch, endpoint).ready()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn predictive_batch() -> Batch {
        let emerging: Vec<_> = (0..12)
            .map(|i| json!({"name": format!("T{}", i), "category": "Clothing", "growth_rate": 100 - i}))
            .collect();
        Batch::new(vec![
            (
                Endpoint::EmergingTrends,
                json!({"success": true, "emerging": emerging, "declining": [], "analysis_period": "2024-01 - 2024-06"}),
            ),
            (Endpoint::EmergingTrendsDynamics, json!({"success": false, "message": "not enough data"})),
            (
                Endpoint::ColorDynamics,
                json!({"success": true, "months": ["2024-01"], "series": [{"name": "Red", "data": [3]}]}),
            ),
            (Endpoint::MaterialDynamics, json!({"success": true, "months": "oops"})),
            (
                Endpoint::TrendPredictions,
                json!({"success": true, "color_predictions": [], "top_combinations": [], "insights": [{"title": "t", "description": "d"}], "overall_metrics": {"predicted_engagement": 42.5}, "confidence_score": 0.78}),
            ),
            (
                Endpoint::Recommendations,
                json!({"success": true, "recommendations": [{"title": "Stock lilac", "description": "", "confidence": 0.6}]}),
            ),
        ])
    }

    #[test]
    fn test_predictive_order_and_skips() {
        let view = render_tab(Tab::Predictive, &predictive_batch());
        let order: Vec<_> = view.charts.iter().map(|c| c.key.as_str()).collect();
        // failed and malformed dynamics are skipped, declining is empty
        assert_eq!(
            order,
            vec![
                keys::EMERGING_TOP10,
                keys::COLOR_DYNAMICS,
                keys::COLOR_PREDICTIONS,
                keys::COMBINATIONS
            ]
        );
        assert_eq!(view.chart(keys::EMERGING_TOP10).unwrap().labels.len(), EMERGING_TOP_N);
        assert_eq!(view.notices, vec!["Analysis period: 2024-01 - 2024-06"]);

        let panel = view.predictions.unwrap();
        assert_eq!(panel.confidence, "78%");
        assert_eq!(panel.insights.len(), 1);
        assert_eq!(view.recommendations[0].title, "Stock lilac");
    }

    #[test]
    fn test_breakdown_one_chart_per_category() {
        let batch = Batch::new(vec![
            (
                Endpoint::ColorsByCategory,
                json!({"success": true, "data": {"Clothing": [{"name": "Black", "count": 9}], "Footwear": [{"name": "White", "count": 4}]}}),
            ),
            (Endpoint::MaterialsByCategory, json!({"success": false})),
            (
                Endpoint::StylesByCategory,
                json!({"success": true, "data": {"Clothing": [{"name": "Casual", "count": 7}]}}),
            ),
        ]);
        let view = render_tab(Tab::Breakdown, &batch);
        let order: Vec<_> = view.charts.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "colorsByCategory-Clothing",
                "colorsByCategory-Footwear",
                "stylesByCategory-Clothing"
            ]
        );
        assert_eq!(view.charts[0].datasets[0].point_color(0), "#000000");
    }

    #[test]
    fn test_items_tab_drilldown_charts() {
        let batch = Batch::new(vec![(
            Endpoint::TopItemsStats(ItemGroup::Footwear),
            json!({"success": true, "items": [{"name": "Sneakers (White)", "count": 12}]}),
        )]);
        let view = render_tab(Tab::Items, &batch);
        assert_eq!(view.charts.len(), 1);
        let item = view.charts[0].item_at(0).unwrap();
        assert_eq!(item.top_category, "Footwear");
        assert_eq!(view.charts[0].title.as_deref(), Some("Top Footwear"));
    }
}
