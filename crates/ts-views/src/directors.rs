//! Top-directors bar chart.

use egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};
use ts_core::SelectionEvent;

use crate::theme;

const CHART_HEIGHT: f32 = 260.0;
const BAR_WIDTH: f64 = 0.7;

/// Horizontal bars for the top-10 director rollup, best on top. Clicking a
/// bar toggles the director selection.
#[derive(Default)]
pub struct TopDirectors {
    ranked: Vec<(String, usize)>,
}

impl TopDirectors {
    pub(crate) fn set(&mut self, ranked: &[(String, usize)]) {
        self.ranked = ranked.to_vec();
    }

    pub fn ui(&self, ui: &mut Ui, selected: Option<&str>) -> Option<SelectionEvent> {
        ui.label(RichText::new("Top 10 Directors").strong().color(theme::TEXT));

        if self.ranked.is_empty() {
            ui.label(RichText::new("No director data for current filters.").color(theme::MUTED));
            return None;
        }

        let rows = self.ranked.len();
        let row_of = |index: usize| (rows - 1 - index) as f64;

        let plot = Plot::new("top_directors")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label("Number of Titles");

        let response = plot.show(ui, |plot_ui| {
            let mut bars = Vec::new();
            for (index, (name, count)) in self.ranked.iter().enumerate() {
                let fill = if selected == Some(name.as_str()) {
                    theme::SELECT
                } else {
                    theme::PRIMARY
                };
                bars.push(Bar::new(row_of(index), *count as f64).width(BAR_WIDTH).fill(fill));
            }
            plot_ui.bar_chart(BarChart::new(bars).horizontal());

            for (index, (name, count)) in self.ranked.iter().enumerate() {
                plot_ui.text(Text::new(
                    PlotPoint::new(*count as f64 * 0.5, row_of(index)),
                    RichText::new(format!("{name}: {count}"))
                        .size(11.0)
                        .color(theme::WHITE),
                ));
            }

            plot_ui.pointer_coordinate()
        });

        if !response.response.clicked() {
            return None;
        }
        let coord = response.inner?;

        // Map the plot coordinate back onto a bar.
        let row = coord.y.round();
        if (coord.y - row).abs() > BAR_WIDTH / 2.0 || !(0.0..rows as f64).contains(&row) {
            return None;
        }
        let index = rows - 1 - row as usize;
        let (name, count) = &self.ranked[index];
        if coord.x < 0.0 || coord.x > *count as f64 {
            return None;
        }
        Some(SelectionEvent::Director(name.clone()))
    }
}
