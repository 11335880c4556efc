//! Shared palette, Okabe-Ito inspired (color-blind safe).

use egui::Color32;
use ts_data::ContentType;

pub const PRIMARY: Color32 = Color32::from_rgb(0x00, 0x72, 0xB2);
pub const GREEN: Color32 = Color32::from_rgb(0x00, 0x9E, 0x73);
pub const ORANGE: Color32 = Color32::from_rgb(0xE6, 0x9F, 0x00);
/// Highlight for the currently selected element of a chart.
pub const SELECT: Color32 = Color32::from_rgb(0xD5, 0x5E, 0x00);
pub const WHITE: Color32 = Color32::WHITE;
pub const MUTED: Color32 = Color32::from_rgb(0x94, 0xA3, 0xB8);
pub const TEXT: Color32 = Color32::from_rgb(0xE2, 0xE8, 0xF0);
/// Country outlines on the map.
pub const OUTLINE: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
/// Panel background behind the map.
pub const PANEL: Color32 = Color32::from_rgb(0x0F, 0x17, 0x2A);

pub fn type_color(ty: ContentType) -> Color32 {
    match ty {
        ContentType::Movie => PRIMARY,
        ContentType::Series => ORANGE,
    }
}

/// Rotating color for word-cloud entries.
pub fn word_color(index: usize) -> Color32 {
    const CYCLE: &[Color32] = &[PRIMARY, GREEN, ORANGE, TEXT];
    CYCLE[index % CYCLE.len()]
}
