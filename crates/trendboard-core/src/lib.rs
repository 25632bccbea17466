//! trendboard-core - Core library for trendboard
//!
//! Provides payload models, the endpoint catalogue, chart specs, the legend
//! visibility model, tab and gallery state, the batch loader and config.
//! Nothing here depends on a browser or an async runtime.

pub mod chart;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod gallery;
pub mod legend;
pub mod loader;
pub mod models;
pub mod palette;
pub mod registry;
pub mod render;
pub mod summary;
pub mod tabs;

pub use chart::{ChartKind, ChartSpec, Dataset, LegendMode};
pub use config::DashboardConfig;
pub use endpoint::{Endpoint, ItemGroup};
pub use error::CoreError;
pub use gallery::GalleryState;
pub use legend::{legend_entries, LegendEntry, VisibilityModel};
pub use loader::{fetch_gallery, load_batch, Batch, Fetcher};
pub use models::{ItemRef, Payload};
pub use registry::ChartRegistry;
pub use render::{render_tab, TabView};
pub use summary::TrendSummary;
pub use tabs::{Activation, Tab, TabController, TabState};
