//! Leptos UI components

mod bar_chart;
mod chart_card;
mod doughnut_chart;
mod gallery_modal;
pub mod geometry;
mod insights;
mod legend;
mod line_chart;
mod stats_card;
mod status;
mod tab_bar;
mod tooltip;

pub use bar_chart::BarChart;
pub use chart_card::ChartCard;
pub use doughnut_chart::DoughnutChart;
pub use gallery_modal::GalleryModal;
pub use insights::{PredictionSummary, RecommendationList};
pub use legend::{InteractiveLegend, StaticLegend};
pub use line_chart::LineChart;
pub use stats_card::{StatsCard, SummaryCards};
pub use status::{AnalyticsLoader, ErrorBanner};
pub use tab_bar::TabBar;
pub use tooltip::TooltipBox;
