//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointPlacementRequested { surface_pos } => {
            vec![AppCommand::AddPointAtPosition { surface_pos }]
        }
        AppIntent::OptimizeRouteRequested => {
            // Eine Anfrage zur Zeit: erneute Auslösung während einer
            // laufenden Anfrage wird verworfen.
            if state.request.is_awaiting() {
                log::info!("Routen-Anfrage läuft bereits, Auslösung wird ignoriert");
                vec![]
            } else {
                vec![AppCommand::RequestRoute]
            }
        }
        AppIntent::RouteResponseReceived { outcome } => {
            vec![AppCommand::ApplyRouteOutcome { outcome }]
        }
        AppIntent::NotificationDismissed => vec![AppCommand::DismissNotification],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
