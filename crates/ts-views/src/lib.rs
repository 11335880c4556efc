//! Render adapters for the title dashboard.
//!
//! One view per aggregate. Each draws from the data last pushed through the
//! `RenderSink` and hands clicks back to the core as `SelectionEvent`s; no
//! view ever reaches into filter state directly.

mod dashboard;
mod directors;
mod durations;
mod geo_outline;
mod kpi_strip;
mod map;
mod pie;
pub mod theme;
mod trend_view;
mod word_cloud;

pub use dashboard::Dashboard;
pub use directors::TopDirectors;
pub use durations::DurationCharts;
pub use geo_outline::{CountryShape, WorldOutline};
pub use kpi_strip::KpiStrip;
pub use map::CountryMap;
pub use pie::TypePie;
pub use trend_view::YearTrendView;
pub use word_cloud::WordCloud;
