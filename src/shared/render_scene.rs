//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::Route;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Snapshot der platzierten Punkte in Einfüge-Reihenfolge
    pub points: Vec<Vec2>,
    /// Zuletzt empfangene Route (None = keine Überlagerung zeichnen)
    pub route: Option<Route>,
    /// Ob gerade eine Service-Anfrage aussteht (für Statusanzeige)
    pub awaiting_route: bool,
    /// Laufzeit-Optionen für Farben, Größen, Versatz
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Routen-Überlagerung vorhanden ist.
    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }
}
