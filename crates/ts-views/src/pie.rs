//! Content-type pie chart.

use egui::{Align2, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, Ui, Vec2};
use ts_core::SelectionEvent;
use ts_data::ContentType;

use crate::theme;

const CHART_HEIGHT: f32 = 220.0;

/// Pie of the type rollup. Clicking a segment toggles the content-type
/// selection; the selected segment is drawn in the highlight color.
#[derive(Default)]
pub struct TypePie {
    counts: Vec<(ContentType, usize)>,
}

impl TypePie {
    pub(crate) fn set(&mut self, counts: &[(ContentType, usize)]) {
        self.counts = counts.to_vec();
    }

    pub fn ui(&self, ui: &mut Ui, selected: Option<ContentType>) -> Option<SelectionEvent> {
        ui.label(RichText::new("Titles by Type").strong().color(theme::TEXT));

        let desired = Vec2::new(ui.available_width(), CHART_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());
        let painter = ui.painter_at(rect);

        let total: usize = self.counts.iter().map(|(_, n)| n).sum();
        if total == 0 {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No data for current filters.",
                FontId::proportional(13.0),
                theme::MUTED,
            );
            return None;
        }

        let center = rect.center();
        let radius = (rect.height().min(rect.width()) * 0.5 - 12.0).max(10.0);
        let pointer = response.interact_pointer_pos();

        let mut start = -std::f32::consts::FRAC_PI_2;
        let mut clicked = None;
        for &(ty, count) in &self.counts {
            let sweep = count as f32 / total as f32 * std::f32::consts::TAU;
            let fill = if selected == Some(ty) {
                theme::SELECT
            } else {
                theme::type_color(ty)
            };

            // Fan of small triangles; a single polygon would not stay
            // convex past a half circle.
            let steps = (sweep / 0.05).ceil().max(1.0) as usize;
            let arc_point = |i: usize| -> Pos2 {
                let angle = start + sweep * i as f32 / steps as f32;
                center + radius * Vec2::new(angle.cos(), angle.sin())
            };
            for i in 0..steps {
                painter.add(Shape::convex_polygon(
                    vec![center, arc_point(i), arc_point(i + 1)],
                    fill,
                    Stroke::NONE,
                ));
            }
            painter.line_segment([center, arc_point(0)], Stroke::new(1.5, theme::WHITE));
            painter.line_segment([center, arc_point(steps)], Stroke::new(1.5, theme::WHITE));

            if response.clicked() {
                if let Some(pos) = pointer {
                    let offset = pos - center;
                    if offset.length() <= radius {
                        let angle = offset.y.atan2(offset.x);
                        let relative = (angle - start).rem_euclid(std::f32::consts::TAU);
                        if relative < sweep {
                            clicked = Some(SelectionEvent::Type(ty));
                        }
                    }
                }
            }

            start += sweep;
        }

        self.legend(&painter, rect, total);
        clicked
    }

    fn legend(&self, painter: &egui::Painter, rect: Rect, total: usize) {
        painter.text(
            Pos2::new(rect.center().x, rect.top() + 10.0),
            Align2::CENTER_CENTER,
            format!("Total Titles: {total}"),
            FontId::proportional(12.0),
            theme::TEXT,
        );

        for (i, &(ty, count)) in self.counts.iter().enumerate() {
            let origin = Pos2::new(rect.right() - 110.0, rect.top() + 30.0 + i as f32 * 20.0);
            painter.rect_filled(
                Rect::from_min_size(origin, Vec2::splat(10.0)),
                2.0,
                theme::type_color(ty),
            );
            painter.text(
                origin + Vec2::new(16.0, 5.0),
                Align2::LEFT_CENTER,
                format!("{}: {count}", ty.label()),
                FontId::proportional(11.0),
                theme::TEXT,
            );
        }
    }
}
