use crate::net::RouteOutcome;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Zeichenfläche; Koordinaten sind bereits in
    /// Oberflächen-Koordinaten umgerechnet (Ursprung = linke obere Ecke)
    PointPlacementRequested { surface_pos: glam::Vec2 },
    /// Routen-Berechnung ausgelöst (Toolbar-Button)
    OptimizeRouteRequested,
    /// Antwort des Optimierungs-Service ist eingetroffen
    RouteResponseReceived { outcome: RouteOutcome },
    /// Benachrichtigungs-Dialog bestätigt
    NotificationDismissed,
    /// Anwendung beenden
    ExitRequested,
}
