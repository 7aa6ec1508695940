//! Handler für Benachrichtigungs-Dialog und Anwendungssteuerung.

use crate::app::AppState;

/// Schließt die aktuelle Benachrichtigung.
pub fn dismiss_notification(state: &mut AppState) {
    state.ui.notification = None;
}

/// Beendet die Anwendung kontrolliert.
pub fn request_exit(state: &mut AppState) {
    log::info!("Anwendung wird beendet");
    state.should_exit = true;
}
