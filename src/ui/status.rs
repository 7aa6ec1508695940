//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Punkte: {}", state.point_count()));

            ui.separator();

            match &state.route {
                Some(route) => ui.label(format!("Route: {} Punkte", route.len())),
                None => ui.label("Route: keine"),
            };

            ui.separator();

            if state.request.is_awaiting() {
                ui.label("Service: wartet auf Antwort…");
            } else {
                ui.label("Service: bereit");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
