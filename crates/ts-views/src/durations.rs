//! Duration distributions: movie run times and season counts.

use egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};
use ts_agg::RuntimeHistogram;

use crate::theme;

const CHART_HEIGHT: f32 = 200.0;

/// Movie run-time histogram and season-count distribution side by side.
/// Pure display; durations carry no click selection.
#[derive(Default)]
pub struct DurationCharts {
    histogram: Option<RuntimeHistogram>,
    seasons: Vec<(u32, usize)>,
}

impl DurationCharts {
    pub(crate) fn set_histogram(&mut self, histogram: Option<&RuntimeHistogram>) {
        self.histogram = histogram.cloned();
    }

    pub(crate) fn set_seasons(&mut self, counts: &[(u32, usize)]) {
        self.seasons = counts.to_vec();
    }

    pub fn ui(&self, ui: &mut Ui) {
        ui.label(RichText::new("Durations").strong().color(theme::TEXT));

        ui.columns(2, |columns| {
            self.movie_chart(&mut columns[0]);
            self.season_chart(&mut columns[1]);
        });
    }

    fn movie_chart(&self, ui: &mut Ui) {
        ui.label(RichText::new("Movies (minutes)").color(theme::PRIMARY));
        let Some(histogram) = &self.histogram else {
            ui.label(RichText::new("No movie duration data").color(theme::MUTED));
            return;
        };

        let bars: Vec<Bar> = histogram
            .bins
            .iter()
            .map(|bin| {
                let center = (bin.start + bin.end) / 2.0;
                let width = (bin.end - bin.start).max(1.0);
                Bar::new(center, bin.count as f64)
                    .width(width * 0.9)
                    .fill(theme::PRIMARY)
            })
            .collect();

        Plot::new("runtime_histogram")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label("Duration (minutes)")
            .y_axis_label("Count")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    fn season_chart(&self, ui: &mut Ui) {
        ui.label(RichText::new("TV Shows (seasons)").color(theme::ORANGE));
        if self.seasons.is_empty() {
            ui.label(RichText::new("No TV duration data").color(theme::MUTED));
            return;
        }

        let bars: Vec<Bar> = self
            .seasons
            .iter()
            .map(|&(seasons, count)| {
                Bar::new(f64::from(seasons), count as f64)
                    .width(0.8)
                    .fill(theme::ORANGE)
            })
            .collect();

        Plot::new("season_distribution")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label("Number of Seasons")
            .y_axis_label("Count")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
}
