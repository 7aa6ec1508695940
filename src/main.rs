//! Truck Route Planner.
//!
//! Punkte per Klick auf der Zeichenfläche platzieren und die optimale
//! Tour von einem externen Optimierungs-Service berechnen lassen.

use eframe::egui;
use truck_route_planner::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Truck Route Planner v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Truck Route Planner"),
            ..Default::default()
        };

        eframe::run_native(
            "Truck Route Planner",
            options,
            Box::new(|_cc| Ok(Box::new(PlannerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PlannerApp {
    state: AppState,
    controller: AppController,
}

impl PlannerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);

        // Ergebnis einer laufenden Service-Anfrage abholen (einmal pro Frame)
        if let Some(outcome) = self.state.request.try_take_outcome() {
            events.push(AppIntent::RouteResponseReceived { outcome });
        }

        self.process_events(events);

        self.maybe_request_repaint(ctx);
    }
}

impl PlannerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::show_notification(
            ctx,
            self.state.ui.notification.as_deref(),
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                events.extend(ui::input::collect_viewport_events(&response));

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(ui.painter(), rect, &scene);

                if scene.points.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Klick platziert den ersten Punkt",
                        egui::FontId::proportional(20.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        // Während einer laufenden Anfrage regelmäßig neu zeichnen,
        // das Polling läuft über die Update-Schleife
        if self.state.request.is_awaiting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else if self.state.ui.notification.is_some() {
            ctx.request_repaint();
        }
    }
}
