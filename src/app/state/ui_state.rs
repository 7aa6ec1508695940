/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Aktuelle Benutzer-Benachrichtigung (None = kein Dialog sichtbar).
    /// Wird ausschließlich vom Controller gesetzt.
    pub notification: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self { notification: None }
    }
}
