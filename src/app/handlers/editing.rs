//! Handler für Punkt-Platzierung auf der Zeichenfläche.

use crate::app::AppState;

/// Hängt einen Punkt an der übergebenen Oberflächen-Position an.
///
/// Immer erlaubt, auch während einer laufenden Routen-Anfrage. Eine
/// bereits gezeichnete Route bleibt unverändert stehen, bis der Benutzer
/// eine neue Berechnung auslöst.
pub fn add_point(state: &mut AppState, surface_pos: glam::Vec2) {
    state.points.append(surface_pos);

    log::info!(
        "Punkt {} an Position ({:.1}, {:.1}) platziert",
        state.points.len(),
        surface_pos.x,
        surface_pos.y
    );
}
