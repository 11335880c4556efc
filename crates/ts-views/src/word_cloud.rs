//! Title word cloud.

use egui::{RichText, ScrollArea, Ui};

use crate::theme;

const MAX_HEIGHT: f32 = 220.0;

/// Ranked title words scaled by frequency. The engine hands over a ranked
/// table; this adapter only scales and wraps the labels.
#[derive(Default)]
pub struct WordCloud {
    ranked: Vec<(String, usize)>,
}

impl WordCloud {
    pub(crate) fn set(&mut self, ranked: &[(String, usize)]) {
        self.ranked = ranked.to_vec();
    }

    pub fn ui(&self, ui: &mut Ui) {
        ui.label(RichText::new("Title Words").strong().color(theme::TEXT));

        if self.ranked.is_empty() {
            ui.label(RichText::new("No title words for current filters.").color(theme::MUTED));
            return;
        }

        let max = self.ranked.iter().map(|(_, n)| *n).max().unwrap_or(1) as f32;

        ScrollArea::vertical()
            .id_source("word_cloud")
            .max_height(MAX_HEIGHT)
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for (index, (word, count)) in self.ranked.iter().enumerate() {
                        let size = 10.0 + 14.0 * (*count as f32 / max).sqrt();
                        ui.label(
                            RichText::new(word)
                                .size(size)
                                .color(theme::word_color(index)),
                        )
                        .on_hover_text(format!("{word}: {count}"));
                    }
                });
            });
    }
}
