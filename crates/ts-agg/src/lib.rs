//! Aggregation engine.
//!
//! Every aggregate here is a pure reduction over the filtered subset (the
//! year trend being the documented exception, see `trend`). Nothing is
//! cached between calls; a refresh recomputes everything.

pub mod histogram;
pub mod kpi;
pub mod orchestrator;
pub mod rollup;
pub mod trend;
pub mod words;

// Re-export commonly used types
pub use histogram::{
    runtime_histogram, season_distribution, HistogramBin, RuntimeHistogram, RUNTIME_BINS,
};
pub use kpi::{kpis, KpiSummary};
pub use orchestrator::{refresh, DashboardFrame, RenderSink};
pub use rollup::{country_rollup, director_rollup, type_rollup, TOP_DIRECTORS};
pub use trend::year_trend;
pub use words::{word_frequencies, TOP_WORDS};
