//! Routen-Überlagerung: geschlossenes Polygon über den Punkt-Layer.

use super::{color32, surface_to_screen, RenderOutcome};
use crate::core::Route;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Baut die Segment-Liste einer geschlossenen Tour.
///
/// N Punkte (N ≥ 2) ergeben genau N Segmente: N−1 entlang der Tour plus
/// das Schlusssegment vom letzten zurück zum ersten Punkt. Für N ≤ 1
/// bleibt die Liste leer.
pub fn closed_tour_segments(points: &[Vec2]) -> Vec<(Vec2, Vec2)> {
    if points.len() <= 1 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        segments.push((pair[0], pair[1]));
    }
    segments.push((points[points.len() - 1], points[0]));
    segments
}

/// Zeichnet die Route als geschlossenes Polygon mit eigener Strichstärke
/// und Kontrastfarbe. Degenerierte Routen werden nicht gezeichnet.
pub fn paint(
    painter: &egui::Painter,
    rect: egui::Rect,
    route: &Route,
    options: &EditorOptions,
) -> RenderOutcome {
    let segments = closed_tour_segments(route.points());
    if segments.is_empty() {
        return RenderOutcome::DegenerateRoute;
    }

    let stroke = egui::Stroke::new(options.route_thickness, color32(options.route_color));
    for (from, to) in segments {
        painter.line_segment(
            [surface_to_screen(rect, from), surface_to_screen(rect, to)],
            stroke,
        );
    }

    RenderOutcome::RouteDrawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_segments_for_degenerate_routes() {
        assert!(closed_tour_segments(&[]).is_empty());
        assert!(closed_tour_segments(&[Vec2::new(5.0, 5.0)]).is_empty());
    }

    #[test]
    fn test_segment_count_equals_point_count() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let segments = closed_tour_segments(&points);

        assert_eq!(segments.len(), points.len());
    }

    #[test]
    fn test_last_segment_closes_tour() {
        let points = vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)];
        let segments = closed_tour_segments(&points);

        let (from, to) = segments[segments.len() - 1];
        assert_relative_eq!(from.x, 3.0);
        assert_relative_eq!(from.y, 3.0);
        assert_relative_eq!(to.x, 1.0);
        assert_relative_eq!(to.y, 1.0);
    }

    #[test]
    fn test_two_points_give_forward_and_closing_segment() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)];
        let segments = closed_tour_segments(&points);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], (points[0], points[1]));
        assert_eq!(segments[1], (points[1], points[0]));
    }
}
