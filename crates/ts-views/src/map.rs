//! Country bubble map.

use egui::{Align2, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use indexmap::IndexMap;
use ts_core::SelectionEvent;

use crate::geo_outline::WorldOutline;
use crate::theme;

const MAP_HEIGHT: f32 = 300.0;

/// World map with one bubble per country in the rollup, sized by the square
/// root of its count. Clicking a bubble toggles the country selection.
pub struct CountryMap {
    world: WorldOutline,
    counts: IndexMap<String, usize>,
}

impl CountryMap {
    pub fn new(world: WorldOutline) -> Self {
        Self {
            world,
            counts: IndexMap::new(),
        }
    }

    pub(crate) fn set(&mut self, counts: &IndexMap<String, usize>) {
        self.counts = counts.clone();
    }

    pub fn ui(&self, ui: &mut Ui, selected: Option<&str>) -> Option<SelectionEvent> {
        ui.label(RichText::new("Titles by Country").strong().color(theme::TEXT));

        let desired = Vec2::new(ui.available_width(), MAP_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, theme::PANEL);

        // Equirectangular projection into the allocated rect.
        let project = |lon: f64, lat: f64| -> Pos2 {
            Pos2::new(
                rect.left() + ((lon + 180.0) / 360.0) as f32 * rect.width(),
                rect.top() + ((90.0 - lat) / 180.0) as f32 * rect.height(),
            )
        };

        for country in self.world.countries() {
            for ring in &country.rings {
                let points: Vec<Pos2> = ring.iter().map(|&[lon, lat]| project(lon, lat)).collect();
                if points.len() >= 3 {
                    painter.add(Shape::closed_line(points, Stroke::new(0.5, theme::OUTLINE)));
                }
            }
        }

        if self.counts.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No country data for current filters.",
                FontId::proportional(13.0),
                theme::MUTED,
            );
            return None;
        }

        let max = self.counts.values().copied().max().unwrap_or(1) as f64;
        let pointer = response.interact_pointer_pos();
        let mut clicked = None;

        for (name, &count) in &self.counts {
            let Some(shape) = self.world.get(name) else {
                // Catalog country names do not all match the boundary set.
                continue;
            };
            let center = project(shape.centroid[0], shape.centroid[1]);
            let radius = 4.0 + 14.0 * (count as f64 / max).sqrt() as f32;
            let is_selected = selected == Some(name.as_str());

            painter.circle(
                center,
                radius,
                if is_selected { theme::SELECT } else { theme::GREEN },
                Stroke::new(if is_selected { 3.0 } else { 1.5 }, theme::WHITE),
            );
            if radius >= 11.0 {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    name,
                    FontId::proportional(10.0),
                    theme::WHITE,
                );
            }

            if response.clicked() {
                if let Some(pos) = pointer {
                    if pos.distance(center) <= radius {
                        clicked = Some(SelectionEvent::Country(name.clone()));
                    }
                }
            }
        }

        clicked
    }
}
