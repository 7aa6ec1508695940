//! Protokoll der ausgeführten Commands.
//!
//! Integrationstests beobachten darüber, welche Intents zu welchen
//! Commands geführt haben (z.B. dass eine zweite Routen-Auslösung
//! während einer laufenden Anfrage keinen Command erzeugt).

use super::AppCommand;

/// Obergrenze gehaltener Einträge; beim Überlauf fällt der älteste weg.
const CAPACITY: usize = 256;

/// Geordnetes Protokoll der ausgeführten Commands.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Erstellt ein leeres Protokoll.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Protokolliert einen ausgeführten Command.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == CAPACITY {
            self.entries.remove(0);
        }
        self.entries.push(command.clone());
    }

    /// Alle Einträge in Ausführungs-Reihenfolge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }
}
