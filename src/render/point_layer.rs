//! Punkt-Layer: gefüllte Kreise mit 1-basierter Index-Beschriftung.

use super::{color32, surface_to_screen};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Baut die Beschriftungen für alle Punkte: Position (Punktzentrum plus
/// Versatz) und Text gleich dem 1-basierten Index in der Sequenz.
pub fn point_labels(points: &[Vec2], offset: Vec2) -> Vec<(Vec2, String)> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| (*point + offset, (index + 1).to_string()))
        .collect()
}

/// Zeichnet alle Punkte samt Beschriftung auf die Fläche.
pub fn paint(painter: &egui::Painter, rect: egui::Rect, points: &[Vec2], options: &EditorOptions) {
    let fill = color32(options.point_color);
    let font = egui::FontId::proportional(12.0);

    for point in points {
        painter.circle_filled(surface_to_screen(rect, *point), options.point_radius, fill);
    }

    for (pos, label) in point_labels(points, options.label_offset_vec()) {
        painter.text(
            surface_to_screen(rect, pos),
            egui::Align2::LEFT_BOTTOM,
            label,
            font.clone(),
            fill,
        );
    }
}
