//! Text cards for predictions and recommendations

use leptos::prelude::*;
use trendboard_core::format::format_value;
use trendboard_core::models::Recommendation;
use trendboard_core::render::PredictionPanel;

#[component]
pub fn PredictionSummary(panel: PredictionPanel) -> impl IntoView {
    view! {
        <div class="card prediction-summary">
            <div class="prediction-metrics">
                <div class="metric">
                    <span class="metric-label">"Model confidence"</span>
                    <span class="metric-value">{panel.confidence.clone()}</span>
                </div>
                <div class="metric">
                    <span class="metric-label">"Predicted engagement"</span>
                    <span class="metric-value">{format_value(panel.predicted_engagement)}</span>
                </div>
            </div>
            <ul class="insight-list">
                {panel
                    .insights
                    .into_iter()
                    .map(|insight| {
                        view! {
                            <li class="insight-item">
                                <strong>{insight.title}</strong>
                                <p>{insight.description}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn RecommendationList(recommendations: Vec<Recommendation>) -> impl IntoView {
    if recommendations.is_empty() {
        return view! { <div class="empty-state">"No recommendations yet"</div> }.into_any();
    }

    view! {
        <div class="recommendation-grid">
            {recommendations
                .into_iter()
                .map(|rec| {
                    let confidence = rec.confidence_label();
                    view! {
                        <div class="card recommendation-card">
                            <div class="recommendation-header">
                                <h4>{rec.title}</h4>
                                <span class="badge">{confidence}</span>
                            </div>
                            <p>{rec.description}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
