//! Toolbar mit dem Auslöser für die Routen-Berechnung.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let awaiting = state.request.is_awaiting();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Der Button ist während einer laufenden Anfrage gesperrt;
            // das Intent-Mapping verwirft zusätzlich jede Auslösung,
            // die trotzdem durchkommt (z.B. per Shortcut).
            if ui
                .add_enabled(!awaiting, egui::Button::new("🚚 Route optimieren"))
                .clicked()
            {
                events.push(AppIntent::OptimizeRouteRequested);
            }

            if awaiting {
                ui.separator();
                ui.spinner();
                ui.label("Optimierung läuft…");
            }

            ui.separator();
            ui.label("Klick auf die Fläche platziert einen Punkt");
        });
    });

    events
}
