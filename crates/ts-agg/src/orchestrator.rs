//! Update orchestrator: one entry point after any filter mutation.

use indexmap::IndexMap;
use tracing::debug;

use ts_core::{evaluate::filtered, FilterState};
use ts_data::{ContentType, RecordStore};

use crate::histogram::{runtime_histogram, season_distribution, RuntimeHistogram};
use crate::kpi::{kpis, KpiSummary};
use crate::rollup::{country_rollup, director_rollup, type_rollup};
use crate::trend::year_trend;
use crate::words::word_frequencies;

/// Every derived view, computed from one evaluator pass (plus the separate
/// ignoring-year pass for the trend). Never mutated in place; a filter
/// change produces a whole new frame.
#[derive(Debug, Clone, Default)]
pub struct DashboardFrame {
    pub kpis: KpiSummary,
    pub type_breakdown: Vec<(ContentType, usize)>,
    pub country_counts: IndexMap<String, usize>,
    pub top_directors: Vec<(String, usize)>,
    pub runtime_histogram: Option<RuntimeHistogram>,
    pub season_distribution: Vec<(u32, usize)>,
    pub word_frequencies: Vec<(String, usize)>,
    pub year_trend: Vec<(i32, usize)>,
}

impl DashboardFrame {
    pub fn compute(store: &RecordStore, state: &FilterState) -> Self {
        let subset = filtered(store, state);
        debug!(
            total = store.len(),
            filtered = subset.len(),
            "recomputing dashboard frame"
        );

        Self {
            kpis: kpis(&subset),
            type_breakdown: type_rollup(&subset),
            country_counts: country_rollup(&subset),
            top_directors: director_rollup(&subset),
            runtime_histogram: runtime_histogram(&subset),
            season_distribution: season_distribution(&subset),
            word_frequencies: word_frequencies(&subset),
            year_trend: year_trend(store, state),
        }
    }
}

/// Receiving end of a refresh: one call per aggregate. Calls arrive in a
/// fixed order with KPIs first, so visible counters never trail the charts.
/// Empty aggregates are forwarded, never skipped.
pub trait RenderSink {
    fn kpis(&mut self, summary: &KpiSummary);
    fn type_breakdown(&mut self, counts: &[(ContentType, usize)]);
    fn country_counts(&mut self, counts: &IndexMap<String, usize>);
    fn top_directors(&mut self, ranked: &[(String, usize)]);
    fn runtime_histogram(&mut self, histogram: Option<&RuntimeHistogram>);
    fn season_distribution(&mut self, counts: &[(u32, usize)]);
    fn word_frequencies(&mut self, ranked: &[(String, usize)]);
    fn year_trend(&mut self, counts: &[(i32, usize)]);
}

/// Full recomputation after any control change or click toggle. There is no
/// partial refresh: every sink method runs on every call.
pub fn refresh(store: &RecordStore, state: &FilterState, sink: &mut dyn RenderSink) {
    let frame = DashboardFrame::compute(store, state);

    sink.kpis(&frame.kpis);
    sink.type_breakdown(&frame.type_breakdown);
    sink.country_counts(&frame.country_counts);
    sink.top_directors(&frame.top_directors);
    sink.runtime_histogram(frame.runtime_histogram.as_ref());
    sink.season_distribution(&frame.season_distribution);
    sink.word_frequencies(&frame.word_frequencies);
    sink.year_trend(&frame.year_trend);
}
