//! Benachrichtigungs-Dialog als modales Fenster.

use crate::app::AppIntent;

/// Zeigt die aktuelle Benachrichtigung des Controllers an.
///
/// Nicht-fatal: Punkte und Route bleiben erhalten, der Benutzer kann
/// nach dem Bestätigen sofort weiterarbeiten.
pub fn show_notification(ctx: &egui::Context, notification: Option<&str>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = notification else {
        return events;
    };

    egui::Window::new("Hinweis")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(message);
                ui.add_space(10.0);

                if ui.button("OK").clicked() {
                    events.push(AppIntent::NotificationDismissed);
                }
            });
        });

    events
}
