//! KPI cards.

use egui::{RichText, Ui};
use ts_agg::KpiSummary;

use crate::theme;

/// Five headline counters across the top of the dashboard.
#[derive(Default)]
pub struct KpiStrip {
    summary: KpiSummary,
}

impl KpiStrip {
    pub(crate) fn set(&mut self, summary: KpiSummary) {
        self.summary = summary;
    }

    pub fn ui(&self, ui: &mut Ui) {
        let s = &self.summary;
        let minutes = s
            .avg_movie_minutes
            .map(|m| format!("{m} min"))
            .unwrap_or_else(|| "–".to_owned());
        let seasons = s
            .avg_seasons
            .map(|m| format!("{m:.1}"))
            .unwrap_or_else(|| "–".to_owned());

        ui.columns(5, |columns| {
            card(&mut columns[0], &s.total.to_string(), "Total Titles");
            card(&mut columns[1], &s.movies.to_string(), "Movies");
            card(&mut columns[2], &s.series.to_string(), "TV Shows");
            card(&mut columns[3], &minutes, "Avg Movie Duration");
            card(&mut columns[4], &seasons, "Avg TV Seasons");
        });
    }
}

fn card(ui: &mut Ui, value: &str, caption: &str) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value).size(22.0).strong().color(theme::TEXT));
            ui.label(RichText::new(caption).size(11.0).color(theme::MUTED));
        });
    });
}
