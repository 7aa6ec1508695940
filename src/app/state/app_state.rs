use crate::app::CommandLog;
use crate::core::{PointSet, Route};
use crate::shared::EditorOptions;

use super::{RequestState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle platzierten Punkte in Einfüge-Reihenfolge
    pub points: PointSet,
    /// Zuletzt empfangene Route (None = keine Überlagerung)
    pub route: Option<Route>,
    /// Zustand der laufenden Service-Anfrage (Idle / AwaitingRoute)
    pub request: RequestState,
    /// UI-State (Benachrichtigungen)
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Service-Endpoint)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            points: PointSet::new(),
            route: None,
            request: RequestState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der platzierten Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt zurück, ob eine Route zum Zeichnen vorliegt.
    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
