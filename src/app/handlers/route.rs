//! Handler für die Routen-Anfrage und das Übernehmen der Service-Antwort.

use crate::app::AppState;
use crate::net::{RouteClient, RouteOutcome};
use std::sync::mpsc;

/// Benachrichtigung, wenn der Service keine Tour gefunden hat.
pub const NO_ROUTE_MESSAGE: &str = "Es wurde keine optimale Route gefunden.";
/// Benachrichtigung, wenn die Tour zu wenige Punkte zum Zeichnen enthält.
pub const DEGENERATE_ROUTE_MESSAGE: &str =
    "Die Route enthält höchstens einen Punkt. Bitte weitere Punkte platzieren.";

/// Startet die Service-Anfrage mit dem aktuellen Punkt-Snapshot.
///
/// Der blockierende HTTP-Austausch läuft auf einem Worker-Thread; das
/// Ergebnis kommt über den Kanal zurück auf den UI-Thread. Der Zustand
/// wechselt sofort zu AwaitingRoute.
pub fn request_route(state: &mut AppState) {
    if state.request.is_awaiting() {
        log::warn!("Routen-Anfrage läuft bereits, Start wird übersprungen");
        return;
    }

    let snapshot = state.points.snapshot();
    let client = RouteClient::new(&state.options.service_url, state.options.request_timeout_secs);
    let (sender, receiver) = mpsc::channel();
    state.request.begin(receiver);

    log::info!(
        "Routen-Anfrage mit {} Punkten an {} gestartet",
        snapshot.len(),
        client.endpoint()
    );

    std::thread::spawn(move || {
        let outcome = client.request_optimal_route(&snapshot);
        // Empfänger kann beim Beenden der App bereits weg sein
        let _ = sender.send(outcome);
    });
}

/// Übernimmt das Ergebnis der Anfrage in den Zustand.
///
/// Jede Variante führt zurück zu Idle (das Abholen aus dem Kanal hat den
/// Zustand bereits gewechselt); keine verändert die Punktmenge.
pub fn apply_outcome(state: &mut AppState, outcome: RouteOutcome) {
    match outcome {
        RouteOutcome::RouteFound(route) => {
            if route.is_degenerate() {
                log::warn!(
                    "Route mit {} Punkt(en) erhalten, zu wenig zum Zeichnen",
                    route.len()
                );
                state.route = None;
                state.ui.notification = Some(DEGENERATE_ROUTE_MESSAGE.to_string());
            } else {
                log::info!("Optimale Route mit {} Punkten erhalten", route.len());
                state.route = Some(route);
            }
        }
        RouteOutcome::NoRouteFound => {
            log::info!("Service hat keine Route gefunden");
            state.ui.notification = Some(NO_ROUTE_MESSAGE.to_string());
        }
        RouteOutcome::TransportError(detail) => {
            log::warn!("Routen-Anfrage fehlgeschlagen: {}", detail);
            state.ui.notification = Some(detail);
        }
    }
}
