//! Zentrale Konfiguration für den Truck Route Planner.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Punkt-Rendering ─────────────────────────────────────────────────

/// Radius der gezeichneten Punkte in Pixeln.
pub const POINT_RADIUS: f32 = 5.0;
/// Füllfarbe der Punkte (RGBA: Blau).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Versatz der Index-Beschriftung relativ zum Punktzentrum in Pixeln.
pub const LABEL_OFFSET: [f32; 2] = [8.0, -8.0];

// ── Routen-Rendering ────────────────────────────────────────────────

/// Linienstärke der Routen-Überlagerung in Pixeln.
pub const ROUTE_THICKNESS: f32 = 2.0;
/// Farbe der Routen-Überlagerung (RGBA: Rot).
pub const ROUTE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Service ─────────────────────────────────────────────────────────

/// Endpoint des Routen-Optimierungs-Service.
pub const SERVICE_URL: &str = "http://localhost:3000/optimize-route";
/// Timeout für den gesamten Request/Response-Austausch in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Planer-Optionen.
/// Wird als `truck_route_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Radius der gezeichneten Punkte in Pixeln
    pub point_radius: f32,
    /// Füllfarbe der Punkte (RGBA)
    pub point_color: [f32; 4],
    /// Versatz der Index-Beschriftung relativ zum Punktzentrum
    pub label_offset: [f32; 2],

    // ── Route ───────────────────────────────────────────────────
    /// Linienstärke der Routen-Überlagerung in Pixeln
    pub route_thickness: f32,
    /// Farbe der Routen-Überlagerung (RGBA)
    pub route_color: [f32; 4],

    // ── Zeichenfläche ───────────────────────────────────────────
    /// Hintergrundfarbe der Zeichenfläche (RGBA)
    pub background_color: [f32; 4],

    // ── Service ─────────────────────────────────────────────────
    /// Endpoint des Routen-Optimierungs-Service
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Timeout für Service-Requests in Sekunden
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            point_color: POINT_COLOR,
            label_offset: LABEL_OFFSET,

            route_thickness: ROUTE_THICKNESS,
            route_color: ROUTE_COLOR,

            background_color: BACKGROUND_COLOR,

            service_url: SERVICE_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Serde-Default für `service_url` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_service_url() -> String {
    SERVICE_URL.to_string()
}

/// Serde-Default für `request_timeout_secs` (Abwärtskompatibilität).
fn default_request_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("truck_route_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("truck_route_planner.toml")
    }

    /// Beschriftungs-Versatz als Vektor.
    pub fn label_offset_vec(&self) -> glam::Vec2 {
        glam::Vec2::new(self.label_offset[0], self.label_offset[1])
    }
}
