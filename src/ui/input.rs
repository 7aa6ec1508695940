//! Viewport-Input: Klick → Oberflächen-Koordinaten → AppIntent.

use crate::app::AppIntent;

/// Sammelt Klick-Events aus dem Viewport und gibt AppIntents zurück.
///
/// Punkt-Platzierung ist in jedem Zustand erlaubt, auch während einer
/// laufenden Routen-Anfrage.
pub fn collect_viewport_events(response: &egui::Response) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let surface_pos = screen_pos_to_surface(pointer_pos, response.rect);
            events.push(AppIntent::PointPlacementRequested { surface_pos });
        }
    }

    events
}

/// Rechnet eine Bildschirmposition in Oberflächen-Koordinaten um.
/// Ursprung ist die linke obere Ecke des Viewport-Rechtecks.
pub fn screen_pos_to_surface(pointer_pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    glam::Vec2::new(pointer_pos.x - rect.min.x, pointer_pos.y - rect.min.y)
}
