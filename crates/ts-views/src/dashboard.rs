//! The dashboard: every view, plus the sink the orchestrator pushes into.

use egui::{ScrollArea, Ui};
use indexmap::IndexMap;
use ts_agg::{KpiSummary, RenderSink, RuntimeHistogram};
use ts_core::{FilterState, SelectionEvent};
use ts_data::ContentType;

use crate::directors::TopDirectors;
use crate::durations::DurationCharts;
use crate::geo_outline::WorldOutline;
use crate::kpi_strip::KpiStrip;
use crate::map::CountryMap;
use crate::pie::TypePie;
use crate::trend_view::YearTrendView;
use crate::word_cloud::WordCloud;

/// Owns all render adapters. The orchestrator pushes aggregates in through
/// `RenderSink`; the app draws with `ui` and feeds the returned selection
/// events back through the toggle protocol.
pub struct Dashboard {
    kpi_strip: KpiStrip,
    type_pie: TypePie,
    country_map: CountryMap,
    top_directors: TopDirectors,
    durations: DurationCharts,
    year_trend: YearTrendView,
    word_cloud: WordCloud,
}

impl Dashboard {
    pub fn new(world: WorldOutline) -> Self {
        Self {
            kpi_strip: KpiStrip::default(),
            type_pie: TypePie::default(),
            country_map: CountryMap::new(world),
            top_directors: TopDirectors::default(),
            durations: DurationCharts::default(),
            year_trend: YearTrendView::default(),
            word_cloud: WordCloud::default(),
        }
    }

    /// Draw every view and collect the clicks. The clicked chart re-renders
    /// on the following refresh like every sibling; selection restyles the
    /// clicked element itself.
    pub fn ui(&mut self, ui: &mut Ui, filters: &FilterState) -> Vec<SelectionEvent> {
        let mut events = Vec::new();

        self.kpi_strip.ui(ui);
        ui.add_space(8.0);

        ScrollArea::vertical().id_source("dashboard").show(ui, |ui| {
            if let Some(event) = self.country_map.ui(ui, filters.selected_country.as_deref()) {
                events.push(event);
            }
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                if let Some(event) = self.type_pie.ui(&mut columns[0], filters.selected_type) {
                    events.push(event);
                }
                self.year_trend.ui(&mut columns[1]);
            });
            ui.add_space(8.0);

            if let Some(event) = self
                .top_directors
                .ui(ui, filters.selected_director.as_deref())
            {
                events.push(event);
            }
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                self.durations.ui(&mut columns[0]);
                self.word_cloud.ui(&mut columns[1]);
            });
        });

        events
    }
}

impl RenderSink for Dashboard {
    fn kpis(&mut self, summary: &KpiSummary) {
        self.kpi_strip.set(summary.clone());
    }

    fn type_breakdown(&mut self, counts: &[(ContentType, usize)]) {
        self.type_pie.set(counts);
    }

    fn country_counts(&mut self, counts: &IndexMap<String, usize>) {
        self.country_map.set(counts);
    }

    fn top_directors(&mut self, ranked: &[(String, usize)]) {
        self.top_directors.set(ranked);
    }

    fn runtime_histogram(&mut self, histogram: Option<&RuntimeHistogram>) {
        self.durations.set_histogram(histogram);
    }

    fn season_distribution(&mut self, counts: &[(u32, usize)]) {
        self.durations.set_seasons(counts);
    }

    fn word_frequencies(&mut self, ranked: &[(String, usize)]) {
        self.word_cloud.set(ranked);
    }

    fn year_trend(&mut self, counts: &[(i32, usize)]) {
        self.year_trend.set(counts);
    }
}
