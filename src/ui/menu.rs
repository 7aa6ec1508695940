//! Top-Menü (File).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let can_optimize = !state.request.is_awaiting();

                if ui
                    .add_enabled(can_optimize, egui::Button::new("Route optimieren"))
                    .clicked()
                {
                    events.push(AppIntent::OptimizeRouteRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
