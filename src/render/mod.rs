//! Renderer für Zeichenfläche, Punkt-Layer und Routen-Überlagerung.
//!
//! Die Geometrie (Segmente, Beschriftungen) wird getrennt von der
//! egui-Ausgabe gebaut, damit Tests ohne Anzeige laufen können.

pub mod point_layer;
pub mod route_overlay;

pub use route_overlay::closed_tour_segments;

use crate::shared::RenderScene;

/// Ergebnis eines Render-Durchlaufs der Routen-Überlagerung.
///
/// Der Renderer löst selbst keine Benachrichtigung aus; der Controller
/// entscheidet anhand desselben Degenerat-Kriteriums beim Eintreffen
/// der Antwort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Keine Route vorhanden, nur Punkte gezeichnet
    PointsOnly,
    /// Route als geschlossenes Polygon gezeichnet
    RouteDrawn,
    /// Route vorhanden, aber mit ≤ 1 Punkt nicht zeichenbar
    DegenerateRoute,
}

/// Zeichnet die komplette Szene: Fläche löschen, Punkte, dann Route.
///
/// Deterministisch und idempotent: derselbe Szenen-Inhalt ergibt
/// dieselbe sichtbare Ausgabe.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) -> RenderOutcome {
    painter.rect_filled(
        rect,
        egui::CornerRadius::ZERO,
        color32(scene.options.background_color),
    );

    point_layer::paint(painter, rect, &scene.points, &scene.options);

    match &scene.route {
        Some(route) => route_overlay::paint(painter, rect, route, &scene.options),
        None => RenderOutcome::PointsOnly,
    }
}

/// Konvertiert eine RGBA-Farbe aus den Optionen in `egui::Color32`.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Rechnet eine Oberflächen-Koordinate in die Painter-Position um.
pub(crate) fn surface_to_screen(rect: egui::Rect, point: glam::Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + point.x, rect.min.y + point.y)
}
