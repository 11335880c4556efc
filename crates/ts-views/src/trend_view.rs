//! Release-year trend line.

use egui::{RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::theme;

const CHART_HEIGHT: f32 = 220.0;

/// Titles released per year. Computed without the year filter, so the line
/// keeps its shape while the rest of the dashboard is pinned to one year.
#[derive(Default)]
pub struct YearTrendView {
    counts: Vec<(i32, usize)>,
}

impl YearTrendView {
    pub(crate) fn set(&mut self, counts: &[(i32, usize)]) {
        self.counts = counts.to_vec();
    }

    pub fn ui(&self, ui: &mut Ui) {
        ui.label(
            RichText::new("Titles Released Over Years")
                .strong()
                .color(theme::TEXT),
        );

        if self.counts.is_empty() {
            ui.label(RichText::new("No trend data for current filters.").color(theme::MUTED));
            return;
        }

        let points: Vec<[f64; 2]> = self
            .counts
            .iter()
            .map(|&(year, count)| [f64::from(year), count as f64])
            .collect();

        Plot::new("year_trend")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label("Release Year")
            .y_axis_label("Number of Titles")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .color(theme::GREEN)
                        .width(2.5)
                        .fill(0.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .radius(3.0)
                        .color(theme::GREEN),
                );
            });
    }
}
