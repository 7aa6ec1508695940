use crate::net::RouteOutcome;

/// Mutierende App-Commands, erzeugt aus Intents über das Intent-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Punkt an Oberflächen-Position anhängen und neu zeichnen
    AddPointAtPosition { surface_pos: glam::Vec2 },
    /// Service-Anfrage mit dem aktuellen Punkt-Snapshot starten
    RequestRoute,
    /// Eingetroffenes Service-Ergebnis in den Zustand übernehmen
    ApplyRouteOutcome { outcome: RouteOutcome },
    /// Benachrichtigung schließen
    DismissNotification,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
